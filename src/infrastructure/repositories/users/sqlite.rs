use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

/// Raw-SQL repository over a SQLite pool.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            name: row.name,
            email: row.email,
            password: row.password,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn get_by_id(&self, id: UserId) -> DomainResult<User> {
        sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password, created_at, updated_at
             FROM users WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .map(User::from)
        .ok_or(DomainError::NotFound)
    }

    async fn get_by_email(&self, email: &str) -> DomainResult<User> {
        sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password, created_at, updated_at
             FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .map(User::from)
        .ok_or(DomainError::NotFound)
    }

    async fn create(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            name,
            email,
            password,
            created_at,
            updated_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (name, email, password, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, name, email, password, created_at, updated_at",
        )
        .bind(name)
        .bind(email)
        .bind(password)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn update(&self, user: &User) -> DomainResult<User> {
        sqlx::query_as::<_, UserRow>(
            "UPDATE users SET name = ?, email = ?, password = ?, updated_at = ?
             WHERE id = ?
             RETURNING id, name, email, password, created_at, updated_at",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.updated_at)
        .bind(i64::from(user.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .map(User::from)
        .ok_or(DomainError::NotFound)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    async fn list(&self, limit: u64, offset: u64) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password, created_at, updated_at
             FROM users ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(to_sql_int(limit))
        .bind(to_sql_int(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
