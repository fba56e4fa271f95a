use crate::intake::fields::FieldStore;

#[test]
fn get_defaults_to_empty_for_unset_fields() {
    let store = FieldStore::new();
    assert_eq!(store.get("company_name"), "");
}

#[test]
fn set_overwrites_unconditionally() {
    let mut store = FieldStore::new();
    store.set("phone", "+254700000000");
    store.set("phone", "+254711111111");
    assert_eq!(store.get("phone"), "+254711111111");
}

#[test]
fn stored_values_are_returned_verbatim() {
    let mut store = FieldStore::new();
    store.set("origin", "  Mombasa  ");
    assert_eq!(store.get("origin"), "  Mombasa  ");
}

#[test]
fn first_missing_reports_absent_and_blank_fields() {
    let mut store = FieldStore::new();
    store.set("email", "j@acme.com");
    store.set("phone", "   ");

    assert_eq!(store.first_missing(&["email"]), None);
    assert_eq!(store.first_missing(&["email", "phone"]), Some("phone"));
    assert_eq!(
        store.first_missing(&["email", "company_name", "phone"]),
        Some("company_name")
    );
}

#[test]
fn reset_returns_every_field_to_its_default() {
    let mut store = FieldStore::new();
    store.set("email", "j@acme.com");
    store.set("phone", "+254700000000");
    store.reset();
    assert_eq!(store.get("email"), "");
    assert_eq!(store.get("phone"), "");
    assert_eq!(store, FieldStore::new());
}
