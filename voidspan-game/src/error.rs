use thiserror::Error;

use crate::constants::KEY_REJECTED_MARKER;

/// Failures talking to the generative-model provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP status (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Transport(String),
    #[error("provider returned HTTP {code}: {message}")]
    Status { code: u16, message: String },
    #[error("could not decode provider response: {0}")]
    Decode(String),
    #[error("no API key configured")]
    MissingKey,
}

impl ApiError {
    /// Transport failures and server-side errors are worth another attempt.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { code, .. } => *code >= 500 && *code <= 599,
            Self::Decode(_) | Self::MissingKey => false,
        }
    }

    /// True when the provider does not recognise the key, so the player must enter a new one.
    #[must_use]
    pub fn is_key_rejected(&self) -> bool {
        match self {
            Self::MissingKey => true,
            Self::Status { message, .. } => message.contains(KEY_REJECTED_MARKER),
            Self::Transport(_) | Self::Decode(_) => false,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Reasons a purchase cannot be taken this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("item name is empty")]
    EmptyItem,
    #[error("no run in progress")]
    NotStarted,
    #[error("the run is already over")]
    AlreadyOver,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error(transparent)]
    Turn(#[from] TurnError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl PurchaseError {
    #[must_use]
    pub fn is_key_rejected(&self) -> bool {
        matches!(self, Self::Api(err) if err.is_key_rejected())
    }
}
