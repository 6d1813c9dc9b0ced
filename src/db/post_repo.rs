use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new post
/// Returns the created post with server-generated id and timestamps
pub async fn create_post(pool: &PgPool, title: &str) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title)
        VALUES ($1)
        RETURNING id, title, created_at, updated_at
        "#,
    )
    .bind(title)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// List all posts in descending order by creation date
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, created_at, updated_at
        FROM posts
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Replace a post's title
/// Returns the updated post, or None if no post has that id
pub async fn update_post_title(
    pool: &PgPool,
    post_id: Uuid,
    title: &str,
) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, updated_at = NOW()
        WHERE id = $2
        RETURNING id, title, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Delete a post
/// Returns true when a row was removed
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
