use folio_domain::config::{ContentConfig, ServerConfig, SiteConfig, SiteSection, StorageConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 3000);
    assert!(server.ssl.is_none());

    let content = ContentConfig::default();
    assert!(!content.is_active());
    assert_eq!(content.dataset, "production");
    assert!(content.timeout_secs.is_none());

    let site = SiteSection::default();
    assert_eq!(site.headline_phrases.len(), 3);
    assert_eq!(site.headline_phrases[0], "Full Stack Developer");

    assert_eq!(StorageConfig::default().static_dir, std::path::PathBuf::from("public"));
}

#[test]
fn site_config_deserializes_partial_sections() {
    let raw = json!({
        "server": { "address": "127.0.0.1", "port": 8080 },
        "content": { "enabled": true, "project_id": "abc123", "timeout_secs": 5 },
        "contact": { "form_endpoint": "https://formspree.io/f/xyz" },
        "logging": { "level": "debug", "json": true }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert!(cfg.content.is_active());
    assert_eq!(cfg.content.api_version, "2024-01-01");
    assert_eq!(cfg.content.timeout_secs, Some(5));
    assert_eq!(cfg.contact.submit_base_url, "https://formspree.io/f");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.runtime.worker_threads.is_none());
}

#[test]
fn enabled_store_without_project_stays_inactive() {
    let cfg: SiteConfig = serde_json::from_value(json!({ "content": { "enabled": true } })).unwrap();
    assert!(!cfg.content.is_active());
}

#[test]
fn config_is_cheap_to_clone_and_copy_on_write() {
    let original = SiteConfig::default();
    let mut tuned = original.clone();
    tuned.server.port = 9000;

    assert_eq!(original.server.port, 3000);
    assert_eq!(tuned.server.port, 9000);
}
