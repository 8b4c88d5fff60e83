mod temporal_aggregator;

pub use temporal_aggregator::{merge_runs, SummaryRun, TemporalAggregator};
