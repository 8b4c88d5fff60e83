mod ingest_counters;

pub use ingest_counters::AtomicIngestCounters;
