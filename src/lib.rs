#![doc = "The `taskhub` library crate."]
#![doc = ""]
#![doc = "Composition layer of the TaskHub API: configuration, the request pipeline"]
#![doc = "(response boundary, timing and identification middlewares), CORS, API docs,"]
#![doc = "and the collaborator layers the controllers reach through use cases."]

pub mod app;
pub mod config;
pub mod dal;
pub mod docs;
pub mod error;
pub mod logic;
pub mod models;
pub mod pipeline;
pub mod routes;
pub mod use_cases;

pub use crate::app::{build_app, AppServices};
pub use crate::config::Config;
pub use crate::error::AppError;
