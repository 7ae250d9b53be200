pub mod users;

pub use users::{ManageUser, ManageUserUseCase};
