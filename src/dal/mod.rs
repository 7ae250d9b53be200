//! Data-access registration point.
//!
//! Persistence is out of scope for TaskHub's API layer; the bundled
//! repository keeps users in memory for the lifetime of the process.

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::error::AppError;
use crate::models::User;

pub trait UserRepository: Send + Sync {
    fn insert(&self, user: User) -> Result<User, AppError>;
    fn find(&self, id: Uuid) -> Result<Option<User>, AppError>;
    fn all(&self) -> Result<Vec<User>, AppError>;
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

fn poisoned<T>(_: T) -> AppError {
    AppError::InternalServerError("User store is unavailable".into())
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&self, user: User) -> Result<User, AppError> {
        self.users.write().map_err(poisoned)?.push(user.clone());
        Ok(user)
    }

    fn find(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    fn all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().map_err(poisoned)?.clone())
    }
}

/// Data-access collaborators, registered once at startup.
#[derive(Clone)]
pub struct Dal {
    pub users: Arc<dyn UserRepository>,
}

pub fn add_dal() -> Dal {
    Dal {
        users: Arc::new(InMemoryUserRepository::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateUserRequest;

    #[test]
    fn test_insert_then_find() {
        let repo = InMemoryUserRepository::default();
        let user = User::new(CreateUserRequest {
            username: "kamil".into(),
            email: "kamil@example.com".into(),
        });

        repo.insert(user.clone()).unwrap();

        assert_eq!(repo.find(user.id).unwrap(), Some(user));
        assert_eq!(repo.find(Uuid::new_v4()).unwrap(), None);
        assert_eq!(repo.all().unwrap().len(), 1);
    }
}
