use crate::config::DatabaseOptions;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, DbErr, SqlxMySqlConnector,
    SqlxSqliteConnector,
};
use sqlx::{
    MySqlPool, SqlitePool,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use thiserror::Error;

const SQLITE_USERS_TABLE: &str = include_str!("../../migrations/20240101000000_create_users.sql");

const MYSQL_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    password VARCHAR(255) NOT NULL,
    created_at DATETIME(6) NOT NULL,
    updated_at DATETIME(6) NOT NULL
)";

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to open database pool: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("failed to prepare schema: {0}")]
    Schema(#[from] DbErr),
}

pub async fn init_sqlite_pool(
    options: SqliteConnectOptions,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

async fn init_mysql_pool(
    options: MySqlConnectOptions,
    max_connections: u32,
) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Open an ORM connection over a driver pool and make sure the `users`
/// table exists.
pub async fn connect_orm(
    options: DatabaseOptions,
    max_connections: u32,
) -> Result<DatabaseConnection, DatabaseError> {
    let db = match options {
        DatabaseOptions::Sqlite(options) => SqlxSqliteConnector::from_sqlx_sqlite_pool(
            init_sqlite_pool(options, max_connections).await?,
        ),
        DatabaseOptions::MySql(options) => SqlxMySqlConnector::from_sqlx_mysql_pool(
            init_mysql_pool(options, max_connections).await?,
        ),
    };

    ensure_users_table(&db).await?;
    Ok(db)
}

async fn ensure_users_table(db: &DatabaseConnection) -> Result<(), DbErr> {
    let ddl = match db.get_database_backend() {
        DbBackend::Sqlite => SQLITE_USERS_TABLE,
        DbBackend::MySql => MYSQL_USERS_TABLE,
        other => {
            return Err(DbErr::Custom(format!(
                "unsupported database backend: {other:?}"
            )));
        }
    };

    db.execute_unprepared(ddl).await?;
    Ok(())
}
