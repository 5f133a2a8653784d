use super::entity::{self, Entity as UserEntity};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::infrastructure::repositories::error::map_db_err;
use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

/// ORM-backed repository. Works against any backend the connection was
/// opened for (SQLite or MySQL); each method issues a single ORM call.
#[derive(Clone)]
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn get_by_id(&self, id: UserId) -> DomainResult<User> {
        UserEntity::find_by_id(i64::from(id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(User::from)
            .ok_or(DomainError::NotFound)
    }

    async fn get_by_email(&self, email: &str) -> DomainResult<User> {
        UserEntity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?
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

        let model = entity::ActiveModel {
            id: NotSet,
            name: Set(name),
            email: Set(email),
            password: Set(password),
            created_at: Set(created_at),
            updated_at: Set(updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, user: &User) -> DomainResult<User> {
        // A zero-row update surfaces as `DbErr::RecordNotUpdated`, which
        // `map_db_err` reports as `NotFound`.
        let model = entity::ActiveModel {
            id: Set(i64::from(user.id)),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .update(&self.db)
        .await
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = UserEntity::delete_by_id(i64::from(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    async fn list(&self, limit: u64, offset: u64) -> DomainResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(entity::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
