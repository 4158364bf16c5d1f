//! Contract models for the knowledgebase service
//!
//! These models are transport-agnostic and used for in-process communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};

/// Persisted module settings, always fully populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Title of the client-facing menu page
    pub menu_page_title: String,
    /// Menu position; lower numbers sort higher, never negative
    pub menu_position: i64,
    /// Hide the client-facing menu entirely
    pub hide_menu: bool,
    /// Content-type slug for help articles (1-20 chars of `[a-z0-9_]`)
    pub post_type: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            menu_page_title: "Knowledgebase".to_string(),
            menu_position: 70,
            hide_menu: false,
            post_type: "client_reference".to_string(),
        }
    }
}

/// Raw settings form fields exactly as submitted, before any validation
///
/// Every field is an optional string: the form boundary performs no parsing.
/// An absent checkbox field means the box was unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSettingsForm {
    pub menu_page_title: Option<String>,
    pub menu_position: Option<String>,
    pub hide_menu: Option<String>,
    pub post_type: Option<String>,
}

/// Outcome of one settings submission, delivered once via the user mailbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStatus {
    /// Overall pass/fail: true only when every field validated cleanly
    pub status: bool,
    /// Human-readable messages, in field order
    pub messages: Vec<String>,
}

impl SettingsStatus {
    /// Fresh status for a new validation pass
    pub fn new() -> Self {
        Self {
            status: false,
            messages: Vec::new(),
        }
    }
}

impl Default for SettingsStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// A hierarchical help article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    /// Parent article, None for top-level articles
    pub parent_id: Option<i64>,
    /// Content-type slug this article belongs to
    pub post_type: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    /// Manual sort order within the table of contents
    pub menu_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Table-of-contents entry: an article without its body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub title: String,
    pub excerpt: String,
    pub menu_order: i64,
}

/// One step of an article's ancestor chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub id: i64,
    pub title: String,
}

/// Target of a pending one-time redirect after a content-type change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    /// Relative URL of the settings page on the new slug
    pub location: String,
}

/// How a settings field renders on the admin form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox,
}

/// Descriptor for one settings form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Settings record key the input binds to
    pub key: &'static str,
    pub kind: FieldKind,
    pub label: &'static str,
    /// CSS class applied to the input, empty for none
    pub css_class: &'static str,
}

/// The enumerated settings form, one entry per settings field
pub fn settings_fields() -> &'static [FieldSpec] {
    const FIELDS: &[FieldSpec] = &[
        FieldSpec {
            key: "menu_page_title",
            kind: FieldKind::Text,
            label: "Menu page title",
            css_class: "",
        },
        FieldSpec {
            key: "menu_position",
            kind: FieldKind::Text,
            label: "Menu position",
            css_class: "",
        },
        FieldSpec {
            key: "hide_menu",
            kind: FieldKind::Checkbox,
            label: "Hide menu",
            css_class: "",
        },
        FieldSpec {
            key: "post_type",
            kind: FieldKind::Text,
            label: "Custom post type",
            css_class: "code",
        },
    ];
    FIELDS
}
