pub mod util;

pub use util::{OutputTarget, parse_seeds, split_csv};
