// src/config.rs
use sqlx::{mysql::MySqlConnectOptions, sqlite::SqliteConnectOptions};
use std::{env, fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DbDriver {
    Sqlite,
    MySql,
}

impl FromStr for DbDriver {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "mysql" => Ok(Self::MySql),
            other => Err(ConfigError::Invalid(format!(
                "DB_DRIVER must be 'sqlite' or 'mysql', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for DbDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sqlite => "sqlite",
            Self::MySql => "mysql",
        })
    }
}

/// Which repository implementation backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepositoryKind {
    Orm,
    Sql,
}

impl FromStr for RepositoryKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orm" => Ok(Self::Orm),
            "sql" => Ok(Self::Sql),
            other => Err(ConfigError::Invalid(format!(
                "USER_REPOSITORY must be 'orm' or 'sql', got '{other}'"
            ))),
        }
    }
}

/// Driver-level connection settings built from the individual config
/// fields, so credentials and paths never pass through a URL.
#[derive(Clone, Debug)]
pub enum DatabaseOptions {
    Sqlite(SqliteConnectOptions),
    MySql(MySqlConnectOptions),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    port: u16,
    driver: DbDriver,
    repository: RepositoryKind,
    db_host: String,
    db_port: u16,
    db_user: String,
    db_password: String,
    db_name: String,
    sqlite_path: String,
    max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_port() -> u16 {
    8080
}

fn default_db_port() -> u16 {
    3306
}

fn default_max_connections() -> u32 {
    16
}

impl AppConfig {
    /// Build configuration from environment variables. Uses defaults for
    /// anything unset and rejects values that do not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = parse_or(&lookup, "APP_PORT", default_port)?;
        let driver = lookup("DB_DRIVER")
            .map(|v| v.parse::<DbDriver>())
            .transpose()?
            .unwrap_or(DbDriver::Sqlite);
        let repository = lookup("USER_REPOSITORY")
            .map(|v| v.parse::<RepositoryKind>())
            .transpose()?
            .unwrap_or(RepositoryKind::Orm);

        if repository == RepositoryKind::Sql && driver != DbDriver::Sqlite {
            return Err(ConfigError::Invalid(
                "USER_REPOSITORY=sql is only available with DB_DRIVER=sqlite".into(),
            ));
        }

        Ok(Self {
            port,
            driver,
            repository,
            db_host: text("DB_HOST", "127.0.0.1"),
            db_port: parse_or(&lookup, "DB_PORT", default_db_port)?,
            db_user: text("DB_USER", "root"),
            db_password: text("DB_PASSWORD", ""),
            db_name: text("DB_NAME", "app"),
            sqlite_path: text("SQLITE_PATH", "app.db"),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", default_max_connections)?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn driver(&self) -> DbDriver {
        self.driver
    }

    pub fn repository(&self) -> RepositoryKind {
        self.repository
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn database_options(&self) -> DatabaseOptions {
        match self.driver {
            DbDriver::Sqlite => DatabaseOptions::Sqlite(self.sqlite_options()),
            DbDriver::MySql => DatabaseOptions::MySql(self.mysql_options()),
        }
    }

    pub fn sqlite_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.sqlite_path)
            .create_if_missing(true)
    }

    pub fn mysql_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value '{raw}'"))),
        None => Ok(default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_sqlite_with_orm_repository() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.driver(), DbDriver::Sqlite);
        assert_eq!(config.repository(), RepositoryKind::Orm);
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.max_connections(), 16);

        let options = config.sqlite_options();
        assert_eq!(options.get_filename(), Path::new("app.db"));
        assert!(matches!(config.database_options(), DatabaseOptions::Sqlite(_)));
    }

    #[test]
    fn builds_mysql_options_from_parts() {
        let config = config_from(&[
            ("DB_DRIVER", "mysql"),
            ("DB_HOST", "db"),
            ("DB_PORT", "3307"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "pw"),
            ("DB_NAME", "users"),
        ])
        .unwrap();

        let options = config.mysql_options();
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 3307);
        assert_eq!(options.get_username(), "app");
        assert_eq!(options.get_database(), Some("users"));
        assert!(matches!(config.database_options(), DatabaseOptions::MySql(_)));
    }

    #[test]
    fn url_reserved_characters_in_credentials_keep_host_and_database() {
        let config = config_from(&[
            ("DB_DRIVER", "mysql"),
            ("DB_USER", "us:er@x"),
            ("DB_PASSWORD", "p@ss:w/rd"),
        ])
        .unwrap();

        assert_eq!(config.db_password, "p@ss:w/rd");
        let options = config.mysql_options();
        assert_eq!(options.get_host(), "127.0.0.1");
        assert_eq!(options.get_port(), 3306);
        assert_eq!(options.get_username(), "us:er@x");
        assert_eq!(options.get_database(), Some("app"));
    }

    #[test]
    fn sqlite_path_with_query_characters_is_kept_verbatim() {
        let config = config_from(&[("SQLITE_PATH", "data/odd?name#1.db")]).unwrap();
        assert_eq!(
            config.sqlite_options().get_filename(),
            Path::new("data/odd?name#1.db")
        );
    }

    #[test]
    fn rejects_unknown_driver_and_bad_port() {
        assert!(config_from(&[("DB_DRIVER", "postgres")]).is_err());
        assert!(config_from(&[("APP_PORT", "eighty")]).is_err());
    }

    #[test]
    fn raw_sql_repository_requires_sqlite() {
        assert!(config_from(&[("USER_REPOSITORY", "sql")]).is_ok());
        assert!(config_from(&[("USER_REPOSITORY", "sql"), ("DB_DRIVER", "mysql")]).is_err());
    }
}
