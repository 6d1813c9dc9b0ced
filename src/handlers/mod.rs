/// HTTP handlers for post endpoints
pub mod posts;

pub use posts::{create_post, delete_post, get_post, list_posts, routes, update_post};
