use actix_web::{web, HttpResponse};

use crate::models::blog::{BlogPostView, BlogSummary};
use crate::services::api_client::{ApiError, StoreApi};
use crate::services::reading_time::estimate_minutes;

/*
    /api/blog/{title}
*/
pub async fn get_by_title(
    api: web::Data<dyn StoreApi>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let title = path.into_inner();
    let post = api.get_blog_by_title(&title).await?;
    let reading_time_minutes = estimate_minutes(&post.content);

    Ok(HttpResponse::Ok().json(BlogPostView {
        post,
        reading_time_minutes,
    }))
}

/*
    /api/blog/tag/{tag}
*/
pub async fn get_by_tag(
    api: web::Data<dyn StoreApi>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let tag = path.into_inner();
    let posts = match api.list_blogs_by_tag(&tag).await {
        Ok(posts) => posts,
        // An unknown tag simply has no posts.
        Err(ApiError::NotFound) => Vec::new(),
        Err(err) => return Err(err),
    };

    let summaries: Vec<BlogSummary> = posts
        .into_iter()
        .map(|post| BlogSummary {
            reading_time_minutes: estimate_minutes(&post.content),
            title: post.title,
            subject: post.subject,
            featured_image: post.featured_image,
            tags: post.tags,
            created_at: post.created_at,
        })
        .collect();

    Ok(HttpResponse::Ok().json(summaries))
}
