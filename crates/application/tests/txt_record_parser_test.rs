mod helpers;

use chrono::Utc;
use ferrous_locator_application::services::TxtRecordParser;
use ferrous_locator_domain::{LocatorError, LookupStatus, TxtRecord};
use helpers::{gateway_record, record, TTL};
use std::time::Duration;

#[test]
fn test_parse_basic_record() {
    let cache =
        TxtRecordParser::parse(&[record(300, &["txtvers=1 hcid=1.2.3 authn=/authn"])], Utc::now())
            .unwrap();

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get("hcid").unwrap().path.as_ref(), "1.2.3");
    assert_eq!(cache.get("authn").unwrap().path.as_ref(), "/authn");
    assert!(cache.get("txtvers").is_none());
    assert_eq!(TxtRecordParser::status_for(&cache), LookupStatus::Success);
}

#[test]
fn test_parse_quoted_presentation_format() {
    let parsed_at = Utc::now();
    let cache = TxtRecordParser::parse(&[gateway_record()], parsed_at).unwrap();

    assert_eq!(cache.len(), 8);
    assert_eq!(cache.get("hcid").unwrap().path.as_ref(), "1.2.276.0.76.3.1.91");
    assert_eq!(cache.get("sgd2").unwrap().path.as_ref(), "/sgd2");

    let entry = cache.get("docv").unwrap();
    assert_eq!(entry.ttl, TTL);
    assert_eq!(entry.valid_until, parsed_at + chrono::Duration::seconds(200));
}

#[test]
fn test_parse_one_token_per_character_string() {
    let cache = TxtRecordParser::parse(
        &[record(60, &["txtvers=1", "authn=/authn", "authz=/authz"])],
        Utc::now(),
    )
    .unwrap();

    assert_eq!(cache.len(), 2);
}

#[test]
fn test_parse_zero_records_is_missing() {
    let cache = TxtRecordParser::parse(&[], Utc::now()).unwrap();

    assert!(cache.is_empty());
    assert_eq!(
        TxtRecordParser::status_for(&cache),
        LookupStatus::MissingTxtRecord
    );
}

#[test]
fn test_parse_version_only_is_missing() {
    let cache = TxtRecordParser::parse(&[record(60, &["txtvers=1"])], Utc::now()).unwrap();

    assert!(cache.is_empty());
    assert_eq!(
        TxtRecordParser::status_for(&cache),
        LookupStatus::MissingTxtRecord
    );
}

#[test]
fn test_parse_rejects_other_version() {
    let result = TxtRecordParser::parse(
        &[record(60, &["txtvers=2 hcid=1.2.3 authn=/authn"])],
        Utc::now(),
    );

    assert_eq!(
        result,
        Err(LocatorError::VersionMismatch {
            found: "2".to_string()
        })
    );
}

#[test]
fn test_parse_version_mismatch_in_later_record_discards_everything() {
    let result = TxtRecordParser::parse(
        &[
            record(60, &["txtvers=1 authn=/authn"]),
            record(60, &["txtvers=3 authz=/authz"]),
        ],
        Utc::now(),
    );

    assert!(matches!(
        result,
        Err(LocatorError::VersionMismatch { .. })
    ));
}

#[test]
fn test_parse_without_version_marker_is_accepted() {
    let cache = TxtRecordParser::parse(&[record(60, &["authn=/authn"])], Utc::now()).unwrap();
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_later_occurrence_overwrites_earlier() {
    let cache = TxtRecordParser::parse(
        &[
            record(60, &["authn=/old"]),
            record(120, &["authn=/new"]),
        ],
        Utc::now(),
    )
    .unwrap();

    let entry = cache.get("authn").unwrap();
    assert_eq!(entry.path.as_ref(), "/new");
    assert_eq!(entry.ttl, Duration::from_secs(120));
}

#[test]
fn test_each_entry_takes_ttl_of_its_record() {
    let cache = TxtRecordParser::parse(
        &[
            TxtRecord::from_text(Duration::from_secs(30), "hcid=1.2.3"),
            TxtRecord::from_text(Duration::from_secs(900), "authn=/authn"),
        ],
        Utc::now(),
    )
    .unwrap();

    assert_eq!(cache.get("hcid").unwrap().ttl, Duration::from_secs(30));
    assert_eq!(cache.get("authn").unwrap().ttl, Duration::from_secs(900));
}
