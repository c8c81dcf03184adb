//! # Engine Error Types Module
//!
//! Faults the conversation engine reports to its caller. None of them is
//! fatal: the caller recovers by showing a menu again.

use thiserror::Error;

use crate::dialogue::Stage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Callback data is not an option of the menu shown for `stage`
    #[error("Invalid selection {data:?} while {stage}")]
    InvalidSelection { data: String, stage: Stage },
    /// Event for a user without a session (other than start)
    #[error("No active session for user {user_id}")]
    NoActiveSession { user_id: u64 },
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
