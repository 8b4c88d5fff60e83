pub mod bulk_load;

pub use bulk_load::{BulkLoadJob, BulkLoadOutcome};
