pub mod backend;
pub mod oracle;
pub mod reports;
pub mod scenarios;
pub mod tester;

pub use scenarios::{LogicScenario, RunSummary, single_purchase};
pub use tester::{LogicTester, ScenarioResult};
