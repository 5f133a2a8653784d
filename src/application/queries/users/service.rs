use std::sync::Arc;

use crate::domain::user::UserRepository;

/// Read side of the user use case. Reads never hash or stamp anything, so
/// only the repository is needed.
#[derive(Clone)]
pub struct UserQueryService {
    pub(super) users: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
