use maybe::{absent, present, Maybe};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Record {
    name: String,
    score: Maybe<u32>,
}

#[test]
fn serializes_like_option() {
    let present_json = serde_json::to_string(&present(5u32)).expect("serialize present");
    let absent_json = serde_json::to_string(&absent::<u32>()).expect("serialize absent");
    assert_eq!(present_json, "5");
    assert_eq!(absent_json, "null");
}

#[test]
fn struct_field_round_trip() {
    let record = Record { name: String::from("a"), score: absent() };
    let json = serde_json::to_string(&record).expect("serialize record");
    assert_eq!(json, r#"{"name":"a","score":null}"#);

    let parsed: Record = serde_json::from_str(r#"{"name":"b","score":12}"#).expect("parse record");
    assert_eq!(parsed, Record { name: String::from("b"), score: present(12) });

    let back: Record = serde_json::from_str(&json).expect("parse back");
    assert_eq!(back, record);
}
