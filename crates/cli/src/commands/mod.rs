pub mod load;
pub mod query;
