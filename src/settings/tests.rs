use super::*;

#[test]
fn test_defaults() {
    let settings = PaneSettings::default();
    assert!(settings.status_line.show);
    assert!(settings.status_line.reverse_video);
    assert_eq!(settings.scroll_precision, 2);
    assert_eq!(settings.tab_width, 4);
    assert!(settings.expand_tabs);
}

#[test]
fn test_lookup_overrides() {
    let settings = PaneSettings::from_lookup(|name| match name {
        "TEXTPANE_NO_STATUS" => Some("1".to_string()),
        "TEXTPANE_SCROLL_PRECISION" => Some(" 4 ".to_string()),
        _ => None,
    });
    assert!(!settings.status_line.show);
    assert_eq!(settings.scroll_precision, 4);
}

#[test]
fn test_lookup_ignores_bad_precision() {
    let settings = PaneSettings::from_lookup(|name| {
        (name == PaneSettings::PRECISION_VAR).then(|| "lots".to_string())
    });
    assert_eq!(settings.scroll_precision, 2);
    assert!(settings.status_line.show);
}
