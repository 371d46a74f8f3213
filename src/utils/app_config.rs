use std::path::PathBuf;

use anyhow::Result;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pool: Pool<ConnectionManager<PgConnection>>,
    pub export_dir: PathBuf,
}

impl AppConfig {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>, export_dir: PathBuf) -> Self {
        Self { pool, export_dir }
    }

    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in .env file or environment variables");
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::new(manager)?;

        let export_dir = std::env::var("CSV_EXPORT_DIR")
            .unwrap_or_else(|_| "./csv_files".to_string());

        Ok(Self::new(pool, PathBuf::from(export_dir)))
    }
}
