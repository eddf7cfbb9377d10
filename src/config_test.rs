use super::*;

fn minimal(default_section: &str) -> String {
    serde_json::json!({
        "default_section": default_section,
        "sections": [
            { "id": "dashboard", "label": "Dashboard" },
            { "id": "parts", "label": "Parts", "nav": false }
        ]
    })
    .to_string()
}

#[test]
fn embedded_config_parses_and_validates() {
    let config = StorefrontConfig::embedded().expect("embedded config");
    assert_eq!(config.storage_key, "pt_user");
    assert_eq!(config.default_section, "dashboard");
    assert!(!config.catalogs.is_empty());
    assert!(config.catalogs.iter().all(|c| !c.cards.is_empty()));
}

#[test]
fn from_json_applies_defaults() {
    let config = StorefrontConfig::from_json(&minimal("dashboard")).expect("config");
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    assert!(config.quick_links.is_empty());
    assert!(config.catalogs.is_empty());
    assert_eq!(config.format, FormatConfig::default());
    assert!(config.sections[0].nav);
    assert!(!config.sections[1].nav);
}

#[test]
fn section_ids_keep_declaration_order() {
    let config = StorefrontConfig::from_json(&minimal("dashboard")).expect("config");
    assert_eq!(config.section_ids(), vec!["dashboard".to_owned(), "parts".to_owned()]);
}

#[test]
fn unknown_default_section_is_rejected() {
    let err = StorefrontConfig::from_json(&minimal("missing")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn duplicate_section_ids_are_rejected() {
    let raw = serde_json::json!({
        "sections": [
            { "id": "dashboard", "label": "A" },
            { "id": "dashboard", "label": "B" }
        ]
    })
    .to_string();
    let err = StorefrontConfig::from_json(&raw).unwrap_err();
    assert!(err.to_string().contains("duplicate section id"));
}

#[test]
fn catalog_pointing_at_unknown_section_is_rejected() {
    let raw = serde_json::json!({
        "sections": [{ "id": "dashboard", "label": "Dashboard" }],
        "catalogs": [{ "section": "nowhere", "title": "Ghost" }]
    })
    .to_string();
    let err = StorefrontConfig::from_json(&raw).unwrap_err();
    assert!(err.to_string().contains("nowhere"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = StorefrontConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn card_kind_reads_type_attribute() {
    let card: CardDef = serde_json::from_value(serde_json::json!({
        "name": "SSD",
        "type": "storage",
        "price": "7990"
    }))
    .expect("card");
    assert_eq!(card.kind, "storage");
    assert_eq!(card.price, "7990");
}

#[test]
fn section_kind_defaults_to_catalog() {
    let config = StorefrontConfig::from_json(&minimal("dashboard")).expect("config");
    assert_eq!(config.sections[0].kind, SectionKind::Catalog);
    let embedded = StorefrontConfig::embedded().expect("embedded");
    assert!(embedded.sections.iter().any(|s| s.kind == SectionKind::Project));
}
