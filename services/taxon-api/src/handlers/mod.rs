//! HTTP handlers

mod auth;
mod category;
mod health;
mod home;

pub use auth::{login, me, signup};
pub use category::{delete_category, get_category_by_id, insert_category, list_categories, update_category};
pub use health::{health, ready};
pub use home::home;
