/// Database access layer
///
/// Repository functions live here; handlers reach them through the service
/// layer rather than calling sqlx directly.
pub mod post_repo;
