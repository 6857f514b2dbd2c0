use crate::log_info;
use crate::shared::errors::AppError;
use crate::shared::utils::logger::LogContext;
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use serde::Serialize;
use std::time::{Duration, Instant};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// SQL under `migrations/`, compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
const MAX_LIFETIME: Duration = Duration::from_secs(1800);
const SLOW_ACQUIRE: Duration = Duration::from_millis(100);

/// Pooled PostgreSQL access shared by every repository.
#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Build the pool; fails fast when no connection can be opened within the acquire timeout.
    pub fn connect(database_url: &str) -> Result<Self, AppError> {
        let sizing = PoolSizing::from_parallelism();
        let manager = ConnectionManager::<PgConnection>::new(database_url);

        let pool = r2d2::Pool::builder()
            .max_size(sizing.max_size)
            .min_idle(Some(sizing.min_idle))
            .connection_timeout(ACQUIRE_TIMEOUT)
            .idle_timeout(Some(IDLE_TIMEOUT))
            .max_lifetime(Some(MAX_LIFETIME))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Connection pool ready (max_size: {}, min_idle: {})",
            sizing.max_size,
            sizing.min_idle
        );

        Ok(Self { pool })
    }

    pub fn get_connection(&self) -> Result<DbConnection, AppError> {
        let start = Instant::now();

        let conn = self.pool.get().map_err(|e| {
            LogContext::failure("Failed to check out a pooled connection", &e);
            AppError::from(e)
        })?;

        let waited = start.elapsed();
        if waited > SLOW_ACQUIRE {
            let state = self.pool.state();
            LogContext::slow_acquire(
                waited,
                state.connections - state.idle_connections,
                self.pool.max_size(),
            );
        }

        Ok(conn)
    }

    /// Apply pending embedded migrations; returns how many ran.
    pub fn run_migrations(&self) -> Result<usize, AppError> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

        for version in &applied {
            log_info!("Applied migration {}", version);
        }
        log_info!("Schema up to date ({} migrations applied)", applied.len());
        Ok(applied.len())
    }

    pub fn pool_status(&self) -> PoolStatus {
        let state = self.pool.state();
        PoolStatus {
            connections: state.connections,
            idle_connections: state.idle_connections,
            max_size: self.pool.max_size(),
        }
    }
}

/// Snapshot of the pool, reported by `/health`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStatus {
    pub connections: u32,
    pub idle_connections: u32,
    pub max_size: u32,
}

#[derive(Debug, PartialEq)]
struct PoolSizing {
    max_size: u32,
    min_idle: u32,
}

impl PoolSizing {
    /// Two connections per core, capped at 20, keeping a quarter warm.
    fn from_parallelism() -> Self {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        Self::for_cores(cores)
    }

    fn for_cores(cores: usize) -> Self {
        let max_size = (cores * 2).clamp(2, 20) as u32;
        let min_idle = (max_size / 4).max(2);
        Self { max_size, min_idle }
    }
}
