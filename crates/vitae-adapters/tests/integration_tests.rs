//! Integration tests for vitae-adapters wired into the core services.

use std::path::Path;

use tempfile::TempDir;
use vitae_adapters::{HtmlRenderer, JsonFileStore, MemoryStore};
use vitae_core::{
    application::{ResumeService, ThemeOverride, ports::ResumeStore},
    domain::{ExperienceEntry, Resume},
    error::VitaeError,
};

fn ana() -> Resume {
    Resume {
        name: "Ana Pop".into(),
        title: "Engineer".into(),
        ..Resume::default()
    }
    .with_experience(&[ExperienceEntry::new(
        "Engineer",
        "Acme",
        "2020-2023",
        ["Built X", "Shipped Y"],
    )])
}

#[test]
fn render_from_disk() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cv.json");
    let output = dir.path().join("cv.html");
    JsonFileStore::new().save(&ana(), &input).unwrap();

    let service = ResumeService::new(Box::new(JsonFileStore::new()), Box::new(HtmlRenderer::new()));
    service
        .render(&input, &output, &ThemeOverride::default())
        .unwrap();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    for needle in ["Ana Pop", "Engineer", "Acme", "Built X", "Shipped Y"] {
        assert!(html.contains(needle), "missing {needle}");
    }
}

#[test]
fn failed_render_leaves_no_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cv.json");
    let output = dir.path().join("cv.html");
    std::fs::write(&input, r#"{"name": "Ana", "experience": "ten years"}"#).unwrap();

    let service = ResumeService::new(Box::new(JsonFileStore::new()), Box::new(HtmlRenderer::new()));
    let err = service
        .render(&input, &output, &ThemeOverride::default())
        .unwrap_err();

    assert!(matches!(err, VitaeError::Domain(_)));
    assert!(!output.exists());
}

#[test]
fn sidebar_override_in_memory() {
    let store = MemoryStore::new();
    store.save(&ana(), Path::new("cv.json")).unwrap();

    let service = ResumeService::new(Box::new(store.clone()), Box::new(HtmlRenderer::new()));
    service
        .render(
            Path::new("cv.json"),
            Path::new("cv.html"),
            &ThemeOverride {
                theme: Some("sidebar".into()),
                sidebar_color: Some("green".into()),
            },
        )
        .unwrap();

    let html = store.get(Path::new("cv.html")).unwrap();
    assert!(html.contains("#2e7d32"));
    assert_eq!(store.load(Path::new("cv.json")).unwrap().theme, "premium");
}

#[test]
fn set_photo_then_render() {
    let store = MemoryStore::new();
    store.save(&ana(), Path::new("cv.json")).unwrap();
    store.insert("me.gif", b"GIF89a\x01\x00".to_vec()).unwrap();

    let service = ResumeService::new(Box::new(store.clone()), Box::new(HtmlRenderer::new()));
    service
        .set_photo(Path::new("cv.json"), Path::new("me.gif"))
        .unwrap();
    service
        .render(
            Path::new("cv.json"),
            Path::new("cv.html"),
            &ThemeOverride::default(),
        )
        .unwrap();

    let html = store.get(Path::new("cv.html")).unwrap();
    assert!(html.contains("data:image/gif;base64,R0lGODlh"));
}
