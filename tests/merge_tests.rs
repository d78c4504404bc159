//! Integration tests merging a nested customer record

use pretty_assertions::assert_eq;
use textmerge::{record, render, Mode, TemplateError};

struct Address {
    street: String,
    number: i32,
}
record!(Address { street, number });

struct Customer {
    name: String,
    age: i32,
    address: Address,
}
record!(Customer { name, age, address });

struct Account {
    registration: Option<String>,
    customer: Customer,
    items: Vec<String>,
}
record!(Account { registration, customer, items });

fn account() -> Account {
    Account {
        registration: Some("123456".to_string()),
        customer: Customer {
            name: "João".to_string(),
            age: 32,
            address: Address {
                street: "Silveira Martins".to_string(),
                number: 30,
            },
        },
        items: ["value1", "value2", "value3", "value4", "value5"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

const MULTIPLE: &str = "Registration ${registration}, name ${customer.name}, age ${customer.age}, \
                        address ${customer.address.street}, ${customer.address.number}.";

#[test]
fn test_simple_property_json() {
    let text = render("Registration: ${registration}.", &account(), Mode::Json).unwrap();
    assert_eq!(text, r#"Registration: "123456"."#);
}

#[test]
fn test_simple_property_plain() {
    let text = render("Registration: ${registration}.", &account(), Mode::Plain).unwrap();
    assert_eq!(text, "Registration: 123456.");
}

#[test]
fn test_nested_property_json() {
    let text = render("Name: ${customer.name}.", &account(), Mode::Json).unwrap();
    assert_eq!(text, r#"Name: "João"."#);
}

#[test]
fn test_nested_property_plain() {
    let text = render("Name: ${customer.name}.", &account(), Mode::Plain).unwrap();
    assert_eq!(text, "Name: João.");
}

#[test]
fn test_multiple_properties_json() {
    let text = render(MULTIPLE, &account(), Mode::Json).unwrap();
    assert_eq!(
        text,
        r#"Registration "123456", name "João", age 32, address "Silveira Martins", 30."#
    );
}

#[test]
fn test_multiple_properties_plain() {
    let text = render(MULTIPLE, &account(), Mode::Plain).unwrap();
    assert_eq!(
        text,
        "Registration 123456, name João, age 32, address Silveira Martins, 30."
    );
}

#[test]
fn test_object_property_json() {
    let text = render(r#"{ "customer": ${customer} }"#, &account(), Mode::Json).unwrap();
    assert_eq!(
        text,
        r#"{ "customer": {"name":"João","age":32,"address":{"street":"Silveira Martins","number":30}} }"#
    );
}

#[test]
fn test_object_property_plain_fails() {
    let err = render(r#"{ "customer": ${customer} }"#, &account(), Mode::Plain).unwrap_err();
    assert!(matches!(err, TemplateError::UnrepresentableValue { mode: Mode::Plain, .. }));
    assert_eq!(err.property(), "customer");
    assert_eq!(err.host_type(), "Account");
    assert_eq!(
        err.to_string(),
        "can't serialize property customer from Account with plain serialization"
    );
}

#[test]
fn test_nested_object_plain_reports_full_path() {
    let err = render("${customer.address}", &account(), Mode::Plain).unwrap_err();
    assert_eq!(err.property(), "customer.address");
    assert_eq!(err.host_type(), "Account");
}

#[test]
fn test_list_property_json() {
    let text = render(r#"{ "items": ${items} }"#, &account(), Mode::Json).unwrap();
    assert_eq!(
        text,
        r#"{ "items": ["value1","value2","value3","value4","value5"] }"#
    );
}

#[test]
fn test_list_property_plain_fails() {
    let err = render(r#"{ "items": ${items} }"#, &account(), Mode::Plain).unwrap_err();
    assert!(matches!(err, TemplateError::UnrepresentableValue { .. }));
    assert_eq!(err.property(), "items");
    assert_eq!(err.host_type(), "Account");
}

#[test]
fn test_null_property_both_modes() {
    let mut acc = account();
    acc.registration = None;
    for mode in [Mode::Plain, Mode::Json] {
        let text = render("Registration is ${registration}", &acc, mode).unwrap();
        assert_eq!(text, "Registration is null");
    }
}

#[test]
fn test_missing_property_both_modes() {
    for mode in [Mode::Plain, Mode::Json] {
        let err = render("Doesn't exist: ${nonExistentProperty}", &account(), mode).unwrap_err();
        assert!(matches!(err, TemplateError::PropertyNotFound { .. }));
        assert_eq!(err.property(), "nonExistentProperty");
        assert_eq!(err.host_type(), "Account");
        assert_eq!(err.span(), &(15..37));
        assert_eq!(
            err.to_string(),
            "can't get property nonExistentProperty from Account"
        );
    }
}

#[test]
fn test_missing_nested_property_names_holder_type() {
    let err = render("${customer.address.zip}", &account(), Mode::Json).unwrap_err();
    assert_eq!(err.property(), "zip");
    assert_eq!(err.host_type(), "Address");

    let err = render("${customer.phone.area}", &account(), Mode::Json).unwrap_err();
    assert_eq!(err.property(), "phone");
    assert_eq!(err.host_type(), "Customer");
}

#[test]
fn test_path_through_null_fails() {
    let mut acc = account();
    acc.registration = None;
    let err = render("${registration.length}", &acc, Mode::Plain).unwrap_err();
    assert_eq!(err.property(), "length");
    assert_eq!(err.host_type(), "null");
}

#[test]
fn test_template_without_placeholders_is_unchanged() {
    let template = "{ \"static\": true } costs $5 {not a placeholder}";
    for mode in [Mode::Plain, Mode::Json] {
        assert_eq!(render(template, &account(), mode).unwrap(), template);
    }
}

struct Price {
    amount: f32,
}
record!(Price { amount });

#[test]
fn test_f32_field_renders_as_written() {
    let price = Price { amount: 0.1 };
    assert_eq!(render("${amount}", &price, Mode::Plain).unwrap(), "0.1");
    assert_eq!(render("${amount}", &price, Mode::Json).unwrap(), "0.1");
    assert_eq!(
        render("${amount}", &price, Mode::Json).unwrap(),
        serde_json::to_string(&price.amount).unwrap()
    );
}
