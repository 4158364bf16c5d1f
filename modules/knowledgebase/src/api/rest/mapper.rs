//! Contract model to DTO mappers

use super::dto::*;
use crate::contract::{
    Article, Breadcrumb, FieldKind, FieldSpec, RawSettingsForm, Settings, SettingsStatus, TocEntry,
};

impl From<Settings> for SettingsDto {
    fn from(model: Settings) -> Self {
        Self {
            menu_page_title: model.menu_page_title,
            menu_position: model.menu_position,
            hide_menu: model.hide_menu,
            post_type: model.post_type,
        }
    }
}

impl From<SettingsStatus> for StatusDto {
    fn from(model: SettingsStatus) -> Self {
        Self {
            status: model.status,
            messages: model.messages,
        }
    }
}

impl From<SaveSettingsRequest> for RawSettingsForm {
    fn from(req: SaveSettingsRequest) -> Self {
        Self {
            menu_page_title: req.menu_page_title,
            menu_position: req.menu_position,
            hide_menu: req.hide_menu,
            post_type: req.post_type,
        }
    }
}

impl From<&FieldSpec> for FieldSpecDto {
    fn from(spec: &FieldSpec) -> Self {
        Self {
            key: spec.key.to_string(),
            kind: match spec.kind {
                FieldKind::Text => "text".to_string(),
                FieldKind::Checkbox => "checkbox".to_string(),
            },
            label: spec.label.to_string(),
            css_class: spec.css_class.to_string(),
        }
    }
}

impl From<TocEntry> for TocEntryDto {
    fn from(model: TocEntry) -> Self {
        Self {
            id: model.id,
            parent_id: model.parent_id,
            title: model.title,
            excerpt: model.excerpt,
            menu_order: model.menu_order,
        }
    }
}

impl From<Article> for ArticleDto {
    fn from(model: Article) -> Self {
        Self {
            id: model.id,
            parent_id: model.parent_id,
            title: model.title,
            excerpt: model.excerpt,
            body: model.body,
            menu_order: model.menu_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Breadcrumb> for BreadcrumbDto {
    fn from(model: Breadcrumb) -> Self {
        Self {
            id: model.id,
            title: model.title,
        }
    }
}
