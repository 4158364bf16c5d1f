//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::settings_fields;
use crate::domain::Service;
use axum::{
    extract::{Form, Path, Query},
    http::{HeaderMap, StatusCode},
    response::Redirect,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Header carrying the host platform's current-user identity
pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolve the calling admin user from the identity header
pub fn current_user(headers: &HeaderMap) -> Result<i64, Problem> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or_else(|| {
            Problem::new(StatusCode::BAD_REQUEST, "Missing User Identity")
                .with_detail(format!("the {} header must carry a user id", USER_ID_HEADER))
        })
}

// ===== Settings Handlers =====

/// Query parameters for the settings page
#[derive(Debug, Deserialize)]
pub struct SettingsPageQuery {
    /// Present after the post/redirect/get hop; triggers the mailbox read
    #[serde(rename = "settings-updated")]
    pub settings_updated: Option<String>,
}

/// Render the settings page data
///
/// When the settings-updated flag is present, the caller's pending status is
/// consumed and included - a second load returns no status.
pub async fn get_settings(
    service: Arc<Service>,
    headers: HeaderMap,
    Query(query): Query<SettingsPageQuery>,
) -> Result<Json<SettingsPageResponse>, Problem> {
    let settings = service.settings().await.map_err(map_domain_error)?;

    let status = if query.settings_updated.is_some() {
        let user_id = current_user(&headers)?;
        service
            .take_user_status(user_id)
            .await
            .map_err(map_domain_error)?
            .map(StatusDto::from)
    } else {
        None
    };

    Ok(Json(SettingsPageResponse {
        settings: settings.into(),
        status,
    }))
}

/// Accept a raw settings form submission
///
/// Always completes with a redirect back to the settings page; the outcome
/// travels through the per-user mailbox and is rendered on the next load.
pub async fn save_settings(
    service: Arc<Service>,
    headers: HeaderMap,
    Form(form): Form<SaveSettingsRequest>,
) -> Result<Redirect, Problem> {
    let user_id = current_user(&headers)?;

    service
        .save_settings(user_id, form.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Redirect::to(&service.settings_page_url()))
}

/// The enumerated settings form descriptor
pub async fn list_fields(_service: Arc<Service>) -> Json<FieldsListResponse> {
    let items: Vec<FieldSpecDto> = settings_fields().iter().map(FieldSpecDto::from).collect();
    let total = items.len();

    Json(FieldsListResponse { items, total })
}

// ===== Article Handlers =====

/// Table of contents for the current content type
pub async fn list_articles(
    service: Arc<Service>,
) -> Result<Json<ArticlesListResponse>, Problem> {
    let entries = service.list_articles().await.map_err(map_domain_error)?;

    let items: Vec<TocEntryDto> = entries.into_iter().map(|e| e.into()).collect();
    let total = items.len();

    Ok(Json(ArticlesListResponse { items, total }))
}

/// A single article with its breadcrumb chain
pub async fn get_article(
    service: Arc<Service>,
    Path(article_id): Path<i64>,
) -> Result<Json<ArticleResponse>, Problem> {
    let article = service
        .get_article(article_id)
        .await
        .map_err(map_domain_error)?;
    let breadcrumbs = service
        .breadcrumbs(article_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ArticleResponse {
        article: article.into(),
        breadcrumbs: breadcrumbs.into_iter().map(|b| b.into()).collect(),
    }))
}
