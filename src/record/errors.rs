use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("session {0} was already recorded")]
    AlreadyRecorded(u32),
}
