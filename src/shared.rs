use thiserror::Error;

use crate::game::SessionError;
use crate::record::RecordError;

/// Boundary-level failures. The game engine itself has no fatal error
/// class; anything here means the surrounding shell must decide whether
/// to retry or exit.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input stream closed")]
    InputClosed,

    #[error("record error: {0}")]
    Record(#[from] RecordError),

    #[error("session error: {0}")]
    Session(#[from] SessionError),
}
