//! Serde roundtrip and JsonSchema validation tests for persisted and rendered types.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use schemars::schema_for;
use civic_core::entities::{Issue, IssueDraft};
use civic_core::enums::{IssueStatus, Priority, StatusFilter};
use civic_core::responses::{IssueCreateResponse, IssueListResponse, SeedResponse};
use civic_core::seed::sample_issues;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn pothole() -> Issue {
    Issue {
        id: "1770552000000".into(),
        issue_type: "pothole".into(),
        description: "Deep pothole in the bike lane".into(),
        location: "Main Street".into(),
        priority: Priority::High,
        status: IssueStatus::Pending,
        date: Utc.with_ymd_and_hms(2026, 2, 8, 12, 0, 0).unwrap(),
        photo: None,
    }
}

roundtrip_and_validate!(issue_roundtrip, Issue, pothole());

roundtrip_and_validate!(
    issue_with_photo_roundtrip,
    Issue,
    Issue {
        photo: Some("blob:local/3f1c".into()),
        ..pothole()
    }
);

roundtrip_and_validate!(
    collection_roundtrip,
    Vec<Issue>,
    sample_issues(Utc.with_ymd_and_hms(2026, 2, 8, 12, 0, 0).unwrap())
);

roundtrip_and_validate!(
    draft_roundtrip,
    IssueDraft,
    IssueDraft::new("water", "Hydrant leaking", "Elm Street", Priority::Low)
        .with_photo("https://example.org/hydrant.jpg")
);

roundtrip_and_validate!(
    list_response_roundtrip,
    IssueListResponse,
    IssueListResponse::new(
        Some("pothole"),
        StatusFilter::Only(IssueStatus::Pending),
        &[pothole()]
    )
);

roundtrip_and_validate!(
    create_response_roundtrip,
    IssueCreateResponse,
    IssueCreateResponse::new(&pothole())
);

roundtrip_and_validate!(
    seed_response_roundtrip,
    SeedResponse,
    SeedResponse {
        seeded: true,
        total: 4
    }
);

#[test]
fn persisted_field_names_are_camel_case() {
    let value = serde_json::to_value(pothole()).unwrap();
    let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "date",
            "description",
            "id",
            "location",
            "photo",
            "priority",
            "status",
            "type"
        ]
    );
    assert!(value["photo"].is_null());
}

#[test]
fn reads_browser_written_record() {
    // Shape produced by `JSON.stringify` in the browser, millisecond timestamps included.
    let json = r#"{"id":"1718000000000","type":"streetlight","description":"Out","location":"Oak St","priority":"medium","status":"in-progress","date":"2024-06-10T06:13:20.000Z","photo":null}"#;
    let issue: Issue = serde_json::from_str(json).unwrap();

    assert_eq!(issue.issue_type, "streetlight");
    assert_eq!(issue.status, IssueStatus::InProgress);
    assert_eq!(issue.date.timestamp_millis(), 1_718_000_000_000);
    assert_eq!(issue.photo, None);
}

#[test]
fn missing_photo_field_reads_as_none() {
    let json = r#"{"id":"9","type":"garbage","description":"","location":"","priority":"low","status":"resolved","date":"2024-06-10T06:13:20Z"}"#;
    let issue: Issue = serde_json::from_str(json).unwrap();
    assert_eq!(issue.photo, None);
    assert!(issue.description.is_empty());
}
