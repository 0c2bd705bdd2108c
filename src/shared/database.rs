use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;

/// Opens the pool. An in-memory SQLite database lives inside a single
/// connection, so the pool is pinned to one connection in that case.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());

    if database_url.contains(":memory:") || database_url.contains("mode=memory") {
        options.max_connections(1).min_connections(1);
    } else {
        options
            .max_connections(20)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(8))
            .acquire_timeout(Duration::from_secs(8));
    }

    options.sqlx_logging(false);

    Database::connect(options).await
}

/// True when `err` comes from a unique index or primary key clash, on any
/// of the supported backends.
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let message = err.to_string().to_lowercase();
    message.contains("23505")
        || message.contains("duplicate key")
        || message.contains("unique constraint")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectionTrait;

    #[tokio::test]
    async fn in_memory_sqlite_answers_queries() {
        let db = connect("sqlite::memory:").await.unwrap();

        let result = db.execute_unprepared("SELECT 1").await;

        assert!(result.is_ok());
    }

    #[test]
    fn detects_unique_violation_from_message() {
        let err = DbErr::Custom(
            "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
        );
        assert!(is_unique_violation(&err));

        let other = DbErr::Custom("connection reset".to_string());
        assert!(!is_unique_violation(&other));
    }
}
