//! Showcase handlers
//!
//! HTTP handlers for building recruiter-facing showcase documents.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::AppState;
use crate::error::AppError;
use crate::models::ShowcaseRequest;
use crate::services::{ShowcaseError, ShowcaseService};

/// Standard API response wrapper
#[derive(Serialize)]
struct ApiResponse<T: Serialize> {
    data: T,
    meta: ResponseMeta,
}

#[derive(Serialize)]
struct ResponseMeta {
    #[serde(rename = "requestId")]
    request_id: String,
}

impl<T: Serialize> ApiResponse<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            meta: ResponseMeta {
                request_id: uuid::Uuid::new_v4().to_string(),
            },
        }
    }
}

/// POST /v1/showcase
///
/// Build the showcase document for one GitHub username: condensed profile,
/// per-language repository counts, and the top starred projects with their
/// recent commit activity.
///
/// Body:
/// - username: GitHub login to showcase
pub async fn build_showcase(
    state: web::Data<AppState>,
    body: web::Json<ShowcaseRequest>,
) -> Result<HttpResponse, AppError> {
    // Reject blank input before any upstream call is made
    let username = body.username.trim().to_string();
    if username.is_empty() {
        return Err(AppError::Validation(
            "username must not be empty".to_string(),
        ));
    }

    let showcase_service = ShowcaseService::new(state.github.clone());

    let response = showcase_service
        .build(&username)
        .await
        .map_err(map_showcase_error)?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(response)))
}

/// Map showcase errors to application errors
fn map_showcase_error(e: ShowcaseError) -> AppError {
    match e {
        ShowcaseError::UserNotFound(login) => {
            AppError::NotFound(format!("GitHub user '{login}' does not exist"))
        }
        ShowcaseError::Upstream(e) => AppError::Upstream(e.to_string()),
    }
}

/// Configure showcase routes
pub fn configure_showcase_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/showcase").route(web::post().to(build_showcase)));
}
