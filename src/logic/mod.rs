//! Business-logic registration point.

use std::sync::Arc;

use uuid::Uuid;

use crate::dal::{Dal, UserRepository};
use crate::error::AppError;
use crate::models::{CreateUserRequest, User};

pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub fn create(&self, input: CreateUserRequest) -> Result<User, AppError> {
        let user = self.users.insert(User::new(input))?;
        log::info!("created user {}", user.id);
        Ok(user)
    }

    pub fn get(&self, id: Uuid) -> Result<User, AppError> {
        self.users
            .find(id)?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub fn list(&self) -> Result<Vec<User>, AppError> {
        self.users.all()
    }
}

/// Business-logic collaborators, registered once at startup.
#[derive(Clone)]
pub struct Logic {
    pub users: Arc<UserManager>,
}

pub fn add_logic(dal: &Dal) -> Logic {
    Logic {
        users: Arc::new(UserManager::new(dal.users.clone())),
    }
}
