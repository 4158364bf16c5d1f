//! Contract layer - public API for in-process consumers
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::KnowledgebaseApi;
pub use error::KnowledgebaseError;
pub use model::{
    settings_fields, Article, Breadcrumb, FieldKind, FieldSpec, RawSettingsForm, RedirectTarget,
    Settings, SettingsStatus, TocEntry,
};
