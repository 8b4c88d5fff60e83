mod ingest_capture_line;

pub use ingest_capture_line::IngestCaptureLineUseCase;
