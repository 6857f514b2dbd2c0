/// Isolated test database utility that creates and cleans up temporary databases
/// Each test gets its own database that is automatically dropped when the test completes
///
/// This uses TEST_DATABASE_URL from the environment to connect to the test database server.
use diesel::sql_types::{Bool, Integer, Text};
use diesel::{sql_query, Connection, PgConnection, QueryableByName, RunQueryDsl};
use pubapi::shared::Database;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;

static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

#[derive(QueryableByName)]
struct IdRow {
    #[diesel(sql_type = Integer)]
    id: i32,
}

/// Isolated test database that automatically cleans up on drop
///
/// # Example
/// ```rust
/// #[tokio::test]
/// #[ignore = "requires TEST_DATABASE_URL"]
/// async fn test_something() {
///     let test_db = TestDb::new();
///     let database = test_db.database();
///     // Test...
/// }
/// ```
pub struct TestDb {
    default_db_url: String,
    name: String,
    database: Arc<Database>,
}

impl TestDb {
    /// Creates a new isolated, fully migrated test database with a unique name
    ///
    /// Database name format: pubapi_test_{process_id}_{counter}
    /// This ensures multiple test processes can run in parallel
    pub fn new() -> Self {
        dotenvy::dotenv().ok();

        let name = format!(
            "pubapi_test_{}_{}",
            std::process::id(),
            TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let test_db_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set in .env for tests");

        let mut conn = PgConnection::establish(&test_db_url)
            .expect("Failed to connect to test database server");

        sql_query(format!("CREATE DATABASE {}", name))
            .execute(&mut conn)
            .unwrap_or_else(|e| panic!("Failed to create test database {}: {}", name, e));

        // Replace the database name in the URL (everything after the last '/')
        let isolated_db_url = match test_db_url.rfind('/') {
            Some(last_slash) => format!("{}/{}", &test_db_url[..last_slash], name),
            None => panic!("Invalid TEST_DATABASE_URL format: {}", test_db_url),
        };

        let database =
            Database::connect(&isolated_db_url).expect("Failed to build test database pool");
        database
            .run_migrations()
            .expect("Unable to migrate the test database");

        Self {
            default_db_url: test_db_url,
            name,
            database: Arc::new(database),
        }
    }

    pub fn database(&self) -> Arc<Database> {
        Arc::clone(&self.database)
    }

    pub fn insert_author(&self, first_name: &str, last_name: &str) -> i32 {
        let mut conn = self.database.get_connection().unwrap();
        sql_query(
            "INSERT INTO authors (first_name, last_name) VALUES ($1, $2) RETURNING author_id AS id",
        )
        .bind::<Text, _>(first_name)
        .bind::<Text, _>(last_name)
        .get_result::<IdRow>(&mut conn)
        .expect("Failed to insert author")
        .id
    }

    pub fn insert_cover(&self, design_ideas: &str, digital_only: bool) -> i32 {
        let mut conn = self.database.get_connection().unwrap();
        sql_query(
            "INSERT INTO covers (design_ideas, digital_only) VALUES ($1, $2) RETURNING cover_id AS id",
        )
        .bind::<Text, _>(design_ideas)
        .bind::<Bool, _>(digital_only)
        .get_result::<IdRow>(&mut conn)
        .expect("Failed to insert cover")
        .id
    }

    pub fn count_books(&self) -> i64 {
        #[derive(QueryableByName)]
        struct CountRow {
            #[diesel(sql_type = diesel::sql_types::BigInt)]
            count: i64,
        }

        let mut conn = self.database.get_connection().unwrap();
        sql_query("SELECT COUNT(*) AS count FROM books")
            .get_result::<CountRow>(&mut conn)
            .expect("Failed to count books")
            .count
    }
}

impl Drop for TestDb {
    /// Terminates open connections and drops the database.
    /// If the thread is panicking the database is left behind for debugging.
    fn drop(&mut self) {
        if thread::panicking() {
            eprintln!(
                "TestDb leaking database '{}' due to panic - database preserved for debugging",
                self.name
            );
            return;
        }

        let mut conn = match PgConnection::establish(&self.default_db_url) {
            Ok(conn) => conn,
            Err(e) => {
                eprintln!("Failed to connect for cleanup of '{}': {}", self.name, e);
                return;
            }
        };

        if let Err(e) = sql_query(format!(
            "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}'",
            self.name
        ))
        .execute(&mut conn)
        {
            eprintln!(
                "Failed to terminate connections for '{}': {}",
                self.name, e
            );
        }

        let drop_result = sql_query(format!("DROP DATABASE IF EXISTS {} WITH (FORCE)", self.name))
            .execute(&mut conn);
        if let Err(e) = drop_result {
            eprintln!("Failed to drop test database '{}': {}", self.name, e);
        }
    }
}
