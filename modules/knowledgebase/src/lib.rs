//! Knowledgebase Module
//!
//! Hierarchical help articles for a CMS admin area, with a settings pipeline:
//! form validation, a one-time content-type migration on slug change, a
//! per-user read-once status mailbox, and a redirect guard that reloads the
//! admin screens after the content type changes.

// Public exports
pub mod contract;
pub use contract::{
    Article, Breadcrumb, KnowledgebaseApi, KnowledgebaseError, RawSettingsForm, RedirectTarget,
    Settings, SettingsStatus, TocEntry,
};

pub mod module;
pub use module::KnowledgebaseModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
