//! Route registration for the admin REST surface

use super::{dto::*, error::Problem, handlers};
use crate::domain::Service;
use axum::{
    extract::Request,
    http::Method,
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Extension, Router,
};
use std::sync::Arc;

/// Build the admin router with the redirect guard installed
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(
            "/settings",
            get(get_settings_handler).put(save_settings_handler),
        )
        .route("/settings/fields", get(list_fields_handler))
        .route("/articles", get(list_articles_handler))
        .route("/articles/{article_id}", get(get_article_handler))
        .layer(middleware::from_fn(redirect_guard))
        // Add service as extension for handlers and the guard
        .layer(Extension(service))
}

/// One-time redirect after a content-type change
///
/// Checked on every admin page load: a pending marker short-circuits the
/// request with a redirect onto the current slug and clears the marker.
/// Form submissions pass through untouched.
async fn redirect_guard(
    Extension(service): Extension<Arc<Service>>,
    req: Request,
    next: Next,
) -> Response {
    if req.method() != Method::GET {
        return next.run(req).await;
    }

    match service.check_pending_redirect().await {
        Ok(Some(target)) => Redirect::to(&target.location).into_response(),
        Ok(None) => next.run(req).await,
        Err(error) => super::error::map_domain_error(error).into_response(),
    }
}

// ===== Handler wrappers that extract service from Extension =====

async fn get_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: axum::http::HeaderMap,
    query: axum::extract::Query<handlers::SettingsPageQuery>,
) -> Result<axum::Json<SettingsPageResponse>, Problem> {
    handlers::get_settings(service, headers, query).await
}

async fn save_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: axum::http::HeaderMap,
    form: axum::extract::Form<SaveSettingsRequest>,
) -> Result<Redirect, Problem> {
    handlers::save_settings(service, headers, form).await
}

async fn list_fields_handler(
    Extension(service): Extension<Arc<Service>>,
) -> axum::Json<FieldsListResponse> {
    handlers::list_fields(service).await
}

async fn list_articles_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<axum::Json<ArticlesListResponse>, Problem> {
    handlers::list_articles(service).await
}

async fn get_article_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<i64>,
) -> Result<axum::Json<ArticleResponse>, Problem> {
    handlers::get_article(service, path).await
}
