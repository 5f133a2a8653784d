// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use user_service::domain::errors::{DomainError, DomainResult};
use user_service::domain::user::{NewUser, User, UserId, UserRepository};

pub fn sample_user(id: i64, email: &str, now: DateTime<Utc>) -> User {
    User {
        id: UserId(id),
        name: format!("user-{id}"),
        email: email.to_string(),
        password: "hashed:secret".into(),
        created_at: now,
        updated_at: now,
    }
}

#[derive(Default)]
struct State {
    users: BTreeMap<i64, User>,
    next_id: i64,
    last_list: Option<(u64, u64)>,
}

/// インメモリのユーザーリポジトリ（email の一意制約つき）
#[derive(Default)]
pub struct InMemoryUserRepo {
    state: Mutex<State>,
    writes: AtomicUsize,
}

impl InMemoryUserRepo {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::default();
        {
            let mut state = repo.state.lock().unwrap();
            for user in users {
                state.next_id = state.next_id.max(user.id.0);
                state.users.insert(user.id.0, user);
            }
        }
        repo
    }

    /// Number of create/update/delete calls that reached the repository.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// `(limit, offset)` of the most recent `list` call.
    pub fn last_list(&self) -> Option<(u64, u64)> {
        self.state.lock().unwrap().last_list
    }

    pub fn stored(&self, id: i64) -> Option<User> {
        self.state.lock().unwrap().users.get(&id).cloned()
    }

    fn email_taken(state: &State, email: &str, except: Option<i64>) -> bool {
        state
            .users
            .values()
            .any(|u| u.email == email && Some(u.id.0) != except)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn get_by_id(&self, id: UserId) -> DomainResult<User> {
        let state = self.state.lock().unwrap();
        state.users.get(&id.0).cloned().ok_or(DomainError::NotFound)
    }

    async fn get_by_email(&self, email: &str) -> DomainResult<User> {
        let state = self.state.lock().unwrap();
        state
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    async fn create(&self, new_user: NewUser) -> DomainResult<User> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        if Self::email_taken(&state, &new_user.email, None) {
            return Err(DomainError::Conflict);
        }
        state.next_id += 1;
        let user = User {
            id: UserId(state.next_id),
            name: new_user.name,
            email: new_user.email,
            password: new_user.password,
            created_at: new_user.created_at,
            updated_at: new_user.updated_at,
        };
        state.users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> DomainResult<User> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        if !state.users.contains_key(&user.id.0) {
            return Err(DomainError::NotFound);
        }
        if Self::email_taken(&state, &user.email, Some(user.id.0)) {
            return Err(DomainError::Conflict);
        }
        state.users.insert(user.id.0, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        state
            .users
            .remove(&id.0)
            .map(|_| ())
            .ok_or(DomainError::NotFound)
    }

    async fn list(&self, limit: u64, offset: u64) -> DomainResult<Vec<User>> {
        let mut state = self.state.lock().unwrap();
        state.last_list = Some((limit, offset));
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(state.users.values().skip(skip).take(take).cloned().collect())
    }
}

/// Every call fails with the given sentinel.
pub struct FailingUserRepo(pub DomainError);

#[async_trait]
impl UserRepository for FailingUserRepo {
    async fn get_by_id(&self, _id: UserId) -> DomainResult<User> {
        Err(self.0)
    }

    async fn get_by_email(&self, _email: &str) -> DomainResult<User> {
        Err(self.0)
    }

    async fn create(&self, _new_user: NewUser) -> DomainResult<User> {
        Err(self.0)
    }

    async fn update(&self, _user: &User) -> DomainResult<User> {
        Err(self.0)
    }

    async fn delete(&self, _id: UserId) -> DomainResult<()> {
        Err(self.0)
    }

    async fn list(&self, _limit: u64, _offset: u64) -> DomainResult<Vec<User>> {
        Err(self.0)
    }
}
