//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Settings DTOs =====

/// Settings response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingsDto {
    /// Title of the client-facing menu page
    #[schema(example = "Knowledgebase")]
    pub menu_page_title: String,

    /// Menu position, never negative
    #[schema(example = 70)]
    pub menu_position: i64,

    /// Whether the client-facing menu is hidden
    pub hide_menu: bool,

    /// Content-type slug for help articles
    #[schema(example = "client_reference")]
    pub post_type: String,
}

/// Settings page response: the record plus any pending one-shot status
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SettingsPageResponse {
    pub settings: SettingsDto,

    /// Pending validation outcome for the caller, consumed by this response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusDto>,
}

/// Validation status DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    /// Overall pass/fail
    pub status: bool,

    /// Messages in field order
    pub messages: Vec<String>,
}

/// Raw settings form submission
///
/// All fields are optional strings, exactly as an HTML form posts them.
/// An absent `hide_menu` means the checkbox was unchecked.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SaveSettingsRequest {
    pub menu_page_title: Option<String>,
    pub menu_position: Option<String>,
    pub hide_menu: Option<String>,
    pub post_type: Option<String>,
}

/// Settings form field descriptor
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldSpecDto {
    /// Settings record key the input binds to
    #[schema(example = "menu_page_title")]
    pub key: String,

    /// Render kind: "text" or "checkbox"
    #[schema(example = "text")]
    pub kind: String,

    /// Form label
    pub label: String,

    /// CSS class for the input, empty for none
    pub css_class: String,
}

/// Field descriptor list response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldsListResponse {
    pub items: Vec<FieldSpecDto>,
    pub total: usize,
}

// ===== Article DTOs =====

/// Table-of-contents entry DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TocEntryDto {
    pub id: i64,

    /// Parent article id, absent for top-level articles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    pub title: String,
    pub excerpt: String,
    pub menu_order: i64,
}

/// Table-of-contents response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticlesListResponse {
    pub items: Vec<TocEntryDto>,
    pub total: usize,
}

/// Full article DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub menu_order: i64,

    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Breadcrumb DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BreadcrumbDto {
    pub id: i64,
    pub title: String,
}

/// Single article response with its ancestor chain
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleResponse {
    pub article: ArticleDto,

    /// Ancestor chain, root first, ending at the article itself
    pub breadcrumbs: Vec<BreadcrumbDto>,
}
