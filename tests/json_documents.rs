//! Integration tests using JSON documents and maps as roots

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use serde_json::json;
use textmerge::{render, render_plain, render_with_config, MergeConfig, Mode, TemplateError};

#[test]
fn test_json_document_root() {
    let data = json!({
        "order": { "id": 42, "paid": true, "total": 19.9, "note": null }
    });
    let text = render(
        "#${order.id} paid=${order.paid} total=${order.total} note=${order.note}",
        &data,
        Mode::Plain,
    )
    .unwrap();
    assert_eq!(text, "#42 paid=true total=19.9 note=null");
}

#[test]
fn test_json_mode_object_is_valid_json() {
    let data = json!({ "user": { "name": "John", "roles": ["admin", "dev"] } });
    let text = render("${user}", &data, Mode::Json).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, data["user"]);
}

#[test]
fn test_json_mode_embeds_into_json_template() {
    let data = json!({ "user": { "name": "John" } });
    let text = render(r#"{ "user": ${user} }"#, &data, Mode::Json).unwrap();
    assert_eq!(text, r#"{ "user": {"name":"John"} }"#);
}

#[test]
fn test_plain_mode_keeps_json_escapes() {
    let data = json!({ "quote": "she said \"hi\"", "path": "C:\\tmp" });
    assert_eq!(
        render_plain("${quote} / ${path}", &data).unwrap(),
        r#"she said \"hi\" / C:\\tmp"#
    );
}

#[test]
fn test_non_object_root() {
    let data = json!("just a string");
    let err = render("${anything}", &data, Mode::Json).unwrap_err();
    assert!(matches!(err, TemplateError::PropertyNotFound { .. }));
    assert_eq!(err.host_type(), "string");
}

#[test]
fn test_map_root() {
    let mut vars = BTreeMap::new();
    vars.insert("greeting".to_string(), "Olá".to_string());
    vars.insert("name".to_string(), "Maria".to_string());
    let text = render("${greeting}, ${name}!", &vars, Mode::Plain).unwrap();
    assert_eq!(text, "Olá, Maria!");

    let err = render("${missing}", &vars, Mode::Plain).unwrap_err();
    assert_eq!(err.host_type(), "map");
}

#[test]
fn test_config_drives_mode() {
    let config = MergeConfig::from_str(r#"mode = "json""#).unwrap();
    let data = json!({ "id": "7" });
    let text = render_with_config("${id}", &data, &config.render_config()).unwrap();
    assert_eq!(text, r#""7""#);
}

#[test]
fn test_error_report_points_at_placeholder() {
    let template = "Hello ${user.nmae}!";
    let data = json!({ "user": { "name": "Ana" } });
    let err = render(template, &data, Mode::Plain).unwrap_err();
    assert_eq!(&template[err.span().clone()], "${user.nmae}");

    let report = err.format(template, "hello.txt", false);
    assert!(report.contains("can't get property nmae from object"));
    assert!(report.contains("hello.txt"));
}
