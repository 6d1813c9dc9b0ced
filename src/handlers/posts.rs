/// Post handlers - HTTP endpoints for post operations
use crate::error::{AppError, Result};
use crate::middleware::{JwtAuthMiddleware, RequestTimingMiddleware, UserId};
use crate::models::Post;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(
        required(message = "The title field is required."),
        length(min = 1, message = "The title field is required.")
    )]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(
        required(message = "The title field is required."),
        length(min = 1, message = "The title field is required.")
    )]
    pub title: Option<String>,
}

/// Envelope for the list endpoint
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub data: Vec<Post>,
}

/// Route configuration for the post API
///
/// Everything under /api/posts sits behind the JWT guard, so handlers run
/// only for authenticated requests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
            .wrap(JwtAuthMiddleware)
            .wrap(RequestTimingMiddleware)
            .service(
                web::resource("")
                    .route(web::get().to(list_posts))
                    .route(web::post().to(create_post)),
            )
            .service(
                web::resource("/{post_id}")
                    .route(web::get().to(get_post))
                    .route(web::put().to(update_post))
                    .route(web::delete().to(delete_post)),
            ),
    );
}

/// List all posts
pub async fn list_posts(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let data = service.list_posts().await?;

    Ok(HttpResponse::Ok().json(PostListResponse { data }))
}

/// Create a new post
pub async fn create_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    // Trim inputs and validate with validator crate
    let req = CreatePostRequest {
        title: payload.title.as_ref().map(|t| t.trim().to_string()),
    };
    req.validate().map_err(AppError::Validation)?;

    let service = PostService::new((**pool).clone());
    let post = service.create_post(req.title.as_deref().unwrap_or_default()).await?;

    tracing::debug!(user_id = %user_id.0, post_id = %post.id, "post created");
    Ok(HttpResponse::Created().json(post))
}

/// Get a post by ID
pub async fn get_post(pool: web::Data<PgPool>, post_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    match service.get_post(*post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Replace a post's title
pub async fn update_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let req = UpdatePostRequest {
        title: payload.title.as_ref().map(|t| t.trim().to_string()),
    };
    req.validate().map_err(AppError::Validation)?;

    let service = PostService::new((**pool).clone());
    match service
        .update_post(*post_id, req.title.as_deref().unwrap_or_default())
        .await?
    {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Delete a post
pub async fn delete_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let deleted = service.delete_post(*post_id).await?;

    if deleted {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::NotFound().finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_req(title: Option<&str>) -> CreatePostRequest {
        CreatePostRequest {
            title: title.map(|t| t.trim().to_string()),
        }
    }

    #[test]
    fn non_empty_title_passes_validation() {
        assert!(create_req(Some("Test post")).validate().is_ok());
    }

    #[test]
    fn missing_title_fails_validation() {
        let errors = create_req(None).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn empty_title_fails_validation() {
        let errors = create_req(Some("")).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn whitespace_only_title_fails_validation() {
        // Handlers trim before validating, mirrored here
        let errors = create_req(Some("   ")).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn update_request_validates_title_like_create() {
        let req = UpdatePostRequest {
            title: Some(String::new()),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }
}
