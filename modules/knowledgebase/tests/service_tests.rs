//! Integration tests for the settings pipeline

use knowledgebase::domain::service::{PENDING_POST_TYPE_KEY, SETTINGS_KEY};
use knowledgebase::domain::Service;
use knowledgebase::{RawSettingsForm, Settings};
use std::sync::Arc;

mod common;
use common::{article, MockArticlesRepo, MockOptionsRepo};

const ADMIN_PATH: &str = "/admin/settings";

fn build_service() -> (Service, MockOptionsRepo, MockArticlesRepo) {
    let options = MockOptionsRepo::new();
    let articles = MockArticlesRepo::new();
    let service = Service::new(
        Arc::new(options.clone()),
        Arc::new(articles.clone()),
        ADMIN_PATH,
    );
    (service, options, articles)
}

fn valid_form(post_type: &str) -> RawSettingsForm {
    RawSettingsForm {
        menu_page_title: Some("Docs".to_string()),
        menu_position: Some("5".to_string()),
        hide_menu: Some("1".to_string()),
        post_type: Some(post_type.to_string()),
    }
}

#[tokio::test]
async fn settings_default_when_never_saved() {
    let (service, _, _) = build_service();

    let settings = service.settings().await.unwrap();
    assert_eq!(settings, Settings::default());
}

#[tokio::test]
async fn install_seeds_defaults_once() {
    let (service, options, _) = build_service();

    service.install().await.unwrap();
    assert!(options.contains(SETTINGS_KEY));

    // A saved change survives a second install
    service.save_settings(1, valid_form("helpdesk")).await.unwrap();
    service.install().await.unwrap();
    assert_eq!(service.settings().await.unwrap().post_type, "helpdesk");
}

#[tokio::test]
async fn valid_submission_updates_record_and_mailbox() {
    let (service, _, _) = build_service();

    let raw = RawSettingsForm {
        menu_page_title: Some("  Docs  ".to_string()),
        menu_position: Some("5".to_string()),
        hide_menu: Some("1".to_string()),
        post_type: Some("HELP!!desk".to_string()),
    };
    let (record, status) = service.save_settings(7, raw).await.unwrap();

    assert_eq!(record.menu_page_title, "Docs");
    assert_eq!(record.menu_position, 5);
    assert!(record.hide_menu);
    assert_eq!(record.post_type, "helpdesk");
    assert!(status.status);
    assert_eq!(status.messages, vec!["Your settings have been saved."]);

    // Persisted wholesale
    assert_eq!(service.settings().await.unwrap(), record);

    // Mailbox round-trip, then empty
    let taken = service.take_user_status(7).await.unwrap();
    assert_eq!(taken, Some(status));
    assert_eq!(service.take_user_status(7).await.unwrap(), None);
}

#[tokio::test]
async fn invalid_submission_keeps_previous_record() {
    let (service, _, articles) = build_service();

    let raw = RawSettingsForm {
        menu_page_title: Some(String::new()),
        menu_position: Some("-3".to_string()),
        hide_menu: Some(String::new()),
        post_type: Some(String::new()),
    };
    let (record, status) = service.save_settings(7, raw).await.unwrap();

    assert_eq!(record, Settings::default());
    assert!(!status.status);
    assert_eq!(
        status.messages,
        vec![
            "Menu page title cannot be empty",
            "Menu position cannot be negative",
            "Post type cannot be empty",
        ]
    );

    // No slug change: no rename, no marker
    assert!(articles.rename_calls().is_empty());
}

#[tokio::test]
async fn mailbox_is_per_user_and_last_write_wins() {
    let (service, _, _) = build_service();

    service.save_settings(1, valid_form("alpha")).await.unwrap();
    service.save_settings(2, valid_form("beta")).await.unwrap();

    // Overwrite user 1's unread entry
    let bad = RawSettingsForm {
        menu_page_title: Some(String::new()),
        ..valid_form("beta")
    };
    service.save_settings(1, bad).await.unwrap();

    let one = service.take_user_status(1).await.unwrap().unwrap();
    assert!(!one.status);

    let two = service.take_user_status(2).await.unwrap().unwrap();
    assert!(two.status);
}

#[tokio::test]
async fn slug_change_triggers_marker_and_single_rename() {
    let (service, options, articles) = build_service();
    articles.insert(article(1, None, "client_reference", "Welcome"));
    articles.insert(article(2, Some(1), "client_reference", "Setup"));

    let (record, status) = service.save_settings(1, valid_form("kb")).await.unwrap();
    assert!(status.status);
    assert_eq!(record.post_type, "kb");

    assert_eq!(
        options.raw(PENDING_POST_TYPE_KEY),
        Some(serde_json::json!("client_reference"))
    );
    assert_eq!(
        articles.rename_calls(),
        vec![("client_reference".to_string(), "kb".to_string())]
    );
    assert_eq!(articles.count_by_type("kb"), 2);
    assert_eq!(articles.count_by_type("client_reference"), 0);
}

#[tokio::test]
async fn unchanged_slug_triggers_neither_marker_nor_rename() {
    let (service, options, articles) = build_service();

    service
        .save_settings(1, valid_form("client_reference"))
        .await
        .unwrap();

    assert!(!options.contains(PENDING_POST_TYPE_KEY));
    assert!(articles.rename_calls().is_empty());
}

#[tokio::test]
async fn redirect_guard_fires_exactly_once() {
    let (service, options, _) = build_service();

    service.save_settings(1, valid_form("kb")).await.unwrap();

    let target = service.check_pending_redirect().await.unwrap().unwrap();
    assert_eq!(
        target.location,
        format!("{}?post_type=kb&settings-updated=true", ADMIN_PATH)
    );
    assert!(!options.contains(PENDING_POST_TYPE_KEY));

    // Second load: marker gone, no redirect
    assert_eq!(service.check_pending_redirect().await.unwrap(), None);
}

#[tokio::test]
async fn redirect_guard_noop_without_marker() {
    let (service, options, _) = build_service();

    assert_eq!(service.check_pending_redirect().await.unwrap(), None);
    assert!(!options.contains(PENDING_POST_TYPE_KEY));
}

#[tokio::test]
async fn rename_failure_is_surfaced_through_mailbox() {
    let (service, _, articles) = build_service();
    articles.fail_next_rename();

    let (record, status) = service.save_settings(1, valid_form("kb")).await.unwrap();

    // The settings update itself still completes
    assert_eq!(record.post_type, "kb");
    assert_eq!(service.settings().await.unwrap().post_type, "kb");

    assert!(!status.status);
    // The failure banner carries only the failure, not a stale success line
    assert_eq!(
        status.messages,
        vec!["Existing articles could not be moved to the new post type"]
    );

    let taken = service.take_user_status(1).await.unwrap().unwrap();
    assert_eq!(taken, status);
}

#[tokio::test]
async fn slug_change_with_no_articles_still_succeeds() {
    let (service, options, articles) = build_service();

    // No articles exist yet: the rename affects zero rows
    let (record, status) = service.save_settings(1, valid_form("kb")).await.unwrap();

    assert_eq!(record.post_type, "kb");
    assert!(status.status);
    assert_eq!(status.messages, vec!["Your settings have been saved."]);

    // The marker and rename call still happen
    assert!(options.contains(PENDING_POST_TYPE_KEY));
    assert_eq!(
        articles.rename_calls(),
        vec![("client_reference".to_string(), "kb".to_string())]
    );
}

#[tokio::test]
async fn stale_marker_is_overwritten_by_new_slug_change() {
    let (service, options, _) = build_service();

    service.save_settings(1, valid_form("kb")).await.unwrap();
    service.save_settings(1, valid_form("manuals")).await.unwrap();

    // Marker now carries the most recent previous slug
    assert_eq!(options.raw(PENDING_POST_TYPE_KEY), Some(serde_json::json!("kb")));

    let target = service.check_pending_redirect().await.unwrap().unwrap();
    assert!(target.location.contains("post_type=manuals"));
}
