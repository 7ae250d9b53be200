use std::sync::Arc;

use uuid::Uuid;

use crate::error::AppError;
use crate::logic::{Logic, UserManager};
use crate::models::{CreateUserRequest, User};

/// User management, as invoked by the users controller.
pub trait ManageUserUseCase: Send + Sync {
    fn create_user(&self, input: CreateUserRequest) -> Result<User, AppError>;
    fn get_user(&self, id: Uuid) -> Result<User, AppError>;
    fn list_users(&self) -> Result<Vec<User>, AppError>;
}

pub struct ManageUser {
    users: Arc<UserManager>,
}

impl ManageUser {
    pub fn new(logic: &Logic) -> Self {
        Self {
            users: logic.users.clone(),
        }
    }
}

impl ManageUserUseCase for ManageUser {
    fn create_user(&self, input: CreateUserRequest) -> Result<User, AppError> {
        self.users.create(input)
    }

    fn get_user(&self, id: Uuid) -> Result<User, AppError> {
        self.users.get(id)
    }

    fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.users.list()
    }
}
