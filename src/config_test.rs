use super::*;

#[test]
fn defaults_match_contact_page_markup() {
    let config = PageConfig::default();
    assert_eq!(config.storage_key, "dark-mode");
    assert_eq!(config.dark_class, "dark-mode");
    assert_eq!(config.toggle_id, "darkmode-toggle");
    assert_eq!(config.modal_id, "ContactModal");
    assert_eq!(config.close_id, "ContactModalClose");
    assert_eq!(config.phone_id, "contact-phone");
}

#[test]
fn open_selector_prefixes_class() {
    assert_eq!(PageConfig::default().open_selector(), ".Link-Form-Open");
}

#[test]
fn from_json_blank_yields_defaults() {
    assert_eq!(PageConfig::from_json("").unwrap(), PageConfig::default());
    assert_eq!(PageConfig::from_json("  \n").unwrap(), PageConfig::default());
}

#[test]
fn from_json_overrides_only_given_fields() {
    let config = PageConfig::from_json(r#"{"modal_id":"Dialog","open_hook":""}"#).unwrap();
    assert_eq!(config.modal_id, "Dialog");
    assert_eq!(config.open_hook, "");
    assert_eq!(config.close_hook, "fechar");
    assert_eq!(config.phone_id, "contact-phone");
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = PageConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn from_json_rejects_wrong_field_type() {
    let err = PageConfig::from_json(r#"{"storage_key": 5}"#).unwrap_err();
    assert!(err.to_string().starts_with("config parse failed"));
}
