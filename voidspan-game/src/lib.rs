//! Voidspan Game Engine
//!
//! Platform-agnostic rules for Voidspan: spend a budget on items to outlast
//! 500 million years in the void. The crate owns the run state, the turn rules
//! and the Gemini wire format; front ends plug in an HTTP backend and a key store.

pub mod config;
pub mod constants;
pub mod difficulty;
pub mod ending;
pub mod error;
pub mod format;
pub mod gemini;
pub mod judgement;
pub mod keys;
pub mod numbers;
pub mod oracle;
pub mod prompts;
pub mod retry;
pub mod state;

// Re-export commonly used types
pub use config::OracleConfig;
pub use difficulty::Difficulty;
pub use ending::{EndingDraft, EndingResult, Grade};
pub use error::{ApiError, PurchaseError, TurnError};
pub use format::{LOADING_MESSAGES, group_digits, loading_message};
pub use judgement::{ItemJudgement, entry_id, parse_years};
pub use keys::{KeyStore, MemoryKeyStore, mask_api_key};
pub use oracle::{
    GeminiOracle, HttpBackend, HttpReply, VoidOracle, VoidRun, resolve_ending, resolve_purchase,
};
pub use retry::{RetryPolicy, retry_with};
pub use state::{GameState, GameStatus, HistoryItem, SanityBand, TurnOutcome};
