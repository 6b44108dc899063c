//! Centralized tuning constants for the Voidspan core.
//!
//! Starting values and timings live here so balance changes go through code
//! review instead of being scattered across the front end.

// Run parameters -------------------------------------------------------------
/// Years the player must get through.
pub const INITIAL_TIME_YEARS: u64 = 500_000_000;
/// Sanity at the start of a run; also the ceiling.
pub const INITIAL_SANITY: i32 = 100;
pub const SANITY_FLOOR: i32 = 0;

pub const CHICKEN_MONEY: i64 = 100_000_000_000_000;
pub const EASY_MONEY: i64 = 100_000_000;
pub const NORMAL_MONEY: i64 = 1_000_000;

// Presentation thresholds ----------------------------------------------------
pub const SANITY_STABLE_ABOVE: i32 = 50;
pub const SANITY_STRAINED_ABOVE: i32 = 20;

// Timings --------------------------------------------------------------------
/// Pause between the final turn and the ending request.
pub const ENDING_DELAY_MS: u32 = 2_000;
/// Rotation period of the loading banner while a purchase is in flight.
pub const LOADING_ROTATE_MS: u32 = 1_500;

// Retry policy ---------------------------------------------------------------
pub const RETRY_ATTEMPTS: u32 = 3;
pub const RETRY_INITIAL_DELAY_MS: u64 = 1_000;

// Gemini defaults ------------------------------------------------------------
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_KEY_HEADER: &str = "x-goog-api-key";
pub const MODEL_ITEM_JUDGE: &str = "gemini-3-flash-preview";
pub const MODEL_ENDING_WRITER: &str = "gemini-3-pro-preview";
pub const MODEL_ILLUSTRATOR: &str = "gemini-2.5-flash-image";
pub const IMAGE_ASPECT_RATIO: &str = "16:9";
/// Message the provider returns for an unknown or revoked key.
pub const KEY_REJECTED_MARKER: &str = "Requested entity was not found";

// Placeholders ---------------------------------------------------------------
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/800/450";
pub const PLACEHOLDER_ENDING_IMAGE_URL: &str = "https://picsum.photos/800/450?grayscale";

// Logging keys ---------------------------------------------------------------
pub(crate) const LOG_TARGET_TURN: &str = "voidspan::turn";
pub(crate) const LOG_TARGET_API: &str = "voidspan::api";
