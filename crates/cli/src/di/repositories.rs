use ferrous_pdns_domain::Config;
use ferrous_pdns_infrastructure::repositories::SqliteCellRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub cells: Arc<SqliteCellRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            cells: Arc::new(SqliteCellRepository::new(
                pool,
                &config.database,
                config.ingest.column_family.clone(),
            )),
        }
    }
}
