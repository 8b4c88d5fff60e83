pub mod ingest;
pub mod queries;

pub use ingest::IngestCaptureLineUseCase;
pub use queries::{GetRdataHistoryUseCase, GetRrsetHistoryUseCase};
