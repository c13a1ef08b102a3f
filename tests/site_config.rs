//! Site directory configuration, end to end
//!
//! Run with: cargo test --test site_config

use std::fs;
use std::path::Path;
use std::sync::Arc;

use qdigital_app::config::{config_path, load_settings, resolve_content};
use qdigital_app::Engine;
use qdigital_core::{Error, Page, Route};
use qdigital_site::headless::command::Command;
use qdigital_site::headless::runner::run_session;
use qdigital_site::headless::HeadlessEvent;
use tempfile::tempdir;
use tokio::sync::mpsc;

fn write_config(site_dir: &Path, toml: &str) {
    let path = config_path(site_dir);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, toml).unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_configured_site_drives_engine() {
    let site = tempdir().unwrap();
    write_config(
        site.path(),
        r#"
[carousel]
interval_ms = 2000

[ui]
start_page = "home"
"#,
    );

    let settings = load_settings(site.path());
    let content = resolve_content(site.path(), &settings, None).unwrap();
    let mut engine = Engine::new(Arc::new(content), settings);

    let (tx, rx) = mpsc::channel(8);
    for line in ["wait 4500", "quit"] {
        tx.send(Command::parse(line).transpose().unwrap()).await.unwrap();
    }
    drop(tx);

    let mut slides = Vec::new();
    run_session(&mut engine, rx, |event| {
        if let HeadlessEvent::SlideChanged { index, .. } = event {
            slides.push(index);
        }
    })
    .await
    .unwrap();

    assert_eq!(slides, vec![1, 2]);
}

#[tokio::test]
async fn test_start_page_from_config() {
    let site = tempdir().unwrap();
    write_config(site.path(), "[ui]\nstart_page = \"team\"\n");

    let settings = load_settings(site.path());
    let content = resolve_content(site.path(), &settings, None).unwrap();
    let engine = Engine::new(Arc::new(content), settings);

    assert_eq!(engine.state.current_route(), &Route::Page(Page::Team));
    assert!(!engine.carousel_timer_armed());
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let site = tempdir().unwrap();
    write_config(site.path(), "[carousel\ninterval_ms = ");

    let settings = load_settings(site.path());
    assert_eq!(settings, Default::default());
}

#[test]
fn test_missing_content_file_is_an_error() {
    let site = tempdir().unwrap();
    write_config(site.path(), "[content]\npath = \"missing.toml\"\n");

    let settings = load_settings(site.path());
    let err = resolve_content(site.path(), &settings, None).unwrap_err();
    assert!(matches!(err, Error::ContentNotFound { .. }));
}
