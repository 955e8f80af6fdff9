pub mod service;

mod errors;
pub mod models;
pub mod repository;

pub use errors::RecordError;
pub use models::*;
pub use repository::{InMemoryRecordRepository, RecordRepository};
pub use service::RecordService;
