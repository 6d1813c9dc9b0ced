/// Post service - handles post creation, retrieval, and management
use crate::db::post_repo;
use crate::error::Result;
use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all posts, newest first
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let posts = post_repo::list_posts(&self.pool).await?;
        Ok(posts)
    }

    /// Create a new post
    pub async fn create_post(&self, title: &str) -> Result<Post> {
        let post = post_repo::create_post(&self.pool, title).await?;

        tracing::info!(post_id = %post.id, "post created");
        Ok(post)
    }

    /// Get a post by ID
    pub async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>> {
        let post = post_repo::find_post_by_id(&self.pool, post_id).await?;
        Ok(post)
    }

    /// Replace a post's title
    ///
    /// Returns None when no post has that id.
    pub async fn update_post(&self, post_id: Uuid, title: &str) -> Result<Option<Post>> {
        let post = post_repo::update_post_title(&self.pool, post_id, title).await?;

        if post.is_some() {
            tracing::info!(%post_id, "post updated");
        }
        Ok(post)
    }

    /// Delete a post
    ///
    /// Returns false when no post has that id.
    pub async fn delete_post(&self, post_id: Uuid) -> Result<bool> {
        let deleted = post_repo::delete_post(&self.pool, post_id).await?;

        if deleted {
            tracing::info!(%post_id, "post deleted");
        }
        Ok(deleted)
    }
}
