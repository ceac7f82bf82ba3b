//! Tests for the payload-to-mutation-set half of the partial-update engine.
//! Everything here is pure: no pool, no rows, just decoding and SQL rendering.

use serde_json::{Map, Value, json};

use ridedesk::modules::admins::service::ADMIN_SCHEMA;
use ridedesk::modules::drivers::service::DRIVER_SCHEMA;
use ridedesk::utils::errors::AppError;
use ridedesk::utils::password::verify_password;
use ridedesk::utils::update::{build_update_query, build_update_set};

fn payload(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

#[test]
fn test_only_present_fields_enter_the_set() {
    let set = build_update_set(&ADMIN_SCHEMA, &payload(json!({"first_name": "Ana"}))).unwrap();
    assert_eq!(set.len(), 1);
    assert!(!set.is_empty());
    assert_eq!(set.column_names(), vec!["first_name"]);
    assert_eq!(set.text_value("first_name"), Some("Ana"));
}

#[test]
fn test_empty_value_clears_nullable_field() {
    let set = build_update_set(&ADMIN_SCHEMA, &payload(json!({"phone_number": ""}))).unwrap();
    assert_eq!(set.column_names(), vec!["phone_number"]);

    let set = build_update_set(&ADMIN_SCHEMA, &payload(json!({"phone_number": null}))).unwrap();
    assert_eq!(set.column_names(), vec!["phone_number"]);
}

#[test]
fn test_empty_value_on_required_field_is_skipped() {
    let set = build_update_set(
        &ADMIN_SCHEMA,
        &payload(json!({"first_name": "", "last_name": "Cruz"})),
    )
    .unwrap();
    assert_eq!(set.column_names(), vec!["last_name"]);
}

#[test]
fn test_empty_payload_is_rejected() {
    let err = build_update_set(&ADMIN_SCHEMA, &payload(json!({}))).unwrap_err();
    assert!(matches!(err, AppError::NoFieldsProvided));
    assert_eq!(err.message(), "No fields to update.");
}

#[test]
fn test_payload_of_only_skipped_fields_is_rejected() {
    // A lone empty required field decodes to nothing, which is the same as
    // sending no fields at all.
    let err = build_update_set(&ADMIN_SCHEMA, &payload(json!({"first_name": ""}))).unwrap_err();
    assert!(matches!(err, AppError::NoFieldsProvided));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let set = build_update_set(
        &ADMIN_SCHEMA,
        &payload(json!({"first_name": "Ana", "favorite_color": "teal"})),
    )
    .unwrap();
    assert_eq!(set.column_names(), vec!["first_name"]);
}

#[test]
fn test_secret_field_is_hashed_into_its_column() {
    let set =
        build_update_set(&ADMIN_SCHEMA, &payload(json!({"password": "new-secret-99"}))).unwrap();
    assert_eq!(set.column_names(), vec!["password_hash"]);

    let stored = set.text_value("password_hash").unwrap();
    assert_ne!(stored, "new-secret-99");
    assert!(verify_password("new-secret-99", stored).unwrap());
}

#[test]
fn test_bad_date_is_a_validation_error() {
    let err = build_update_set(
        &DRIVER_SCHEMA,
        &payload(json!({"date_of_birth": "31-12-1990"})),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.message(), "Date of birth must be a valid date (YYYY-MM-DD).");
}

#[test]
fn test_iso_date_is_accepted() {
    let set = build_update_set(
        &DRIVER_SCHEMA,
        &payload(json!({"date_of_birth": "1990-05-01"})),
    )
    .unwrap();
    assert_eq!(set.column_names(), vec!["date_of_birth"]);
}

#[test]
fn test_non_string_text_field_is_rejected() {
    let err = build_update_set(&ADMIN_SCHEMA, &payload(json!({"first_name": 5}))).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.message(), "First name must be a string.");
}

#[test]
fn test_bool_field_accepts_numeric_flags() {
    let set = build_update_set(&ADMIN_SCHEMA, &payload(json!({"is_active": 0}))).unwrap();
    assert_eq!(set.column_names(), vec!["is_active"]);

    let set = build_update_set(&ADMIN_SCHEMA, &payload(json!({"is_active": true}))).unwrap();
    assert_eq!(set.column_names(), vec!["is_active"]);

    let err = build_update_set(&ADMIN_SCHEMA, &payload(json!({"is_active": "yes"}))).unwrap_err();
    assert_eq!(err.message(), "Active flag must be a boolean.");
}

#[test]
fn test_fields_follow_schema_order_not_payload_order() {
    let set = build_update_set(
        &ADMIN_SCHEMA,
        &payload(json!({"last_name": "Cruz", "username": "acruz", "first_name": "Ana"})),
    )
    .unwrap();
    assert_eq!(set.column_names(), vec!["username", "first_name", "last_name"]);
}

#[test]
fn test_rendered_sql_binds_values_and_inlines_null() {
    let set = build_update_set(
        &ADMIN_SCHEMA,
        &payload(json!({"first_name": "Ana", "phone_number": null})),
    )
    .unwrap();

    let mut query = build_update_query(&ADMIN_SCHEMA, set, 7);
    assert_eq!(
        query.sql(),
        "UPDATE admins SET first_name = $1, phone_number = NULL WHERE admin_id = $2"
    );
}

#[test]
fn test_rendered_sql_single_column() {
    let set = build_update_set(&ADMIN_SCHEMA, &payload(json!({"email": "a@b.test"}))).unwrap();
    let mut query = build_update_query(&ADMIN_SCHEMA, set, 3);
    assert_eq!(
        query.sql(),
        "UPDATE admins SET email = $1 WHERE admin_id = $2"
    );
}
