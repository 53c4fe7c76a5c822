//! 협력자 레코드 직렬화와 JSONL 싱크 동작 테스트.
use std::fs;

use greenhouse_climate_sim::io::{JsonlReadingSink, Reading, ReadingSink, TargetRecord};

#[test]
fn target_record_decodes_from_json() {
    let body = r#"{
        "temperature_celsius": 21.5,
        "relative_humidity": 55.0,
        "red": 0.8,
        "blue": 0.4,
        "white": 1.0
    }"#;
    let record: TargetRecord = serde_json::from_str(body).expect("decode target record");
    assert_eq!(
        record,
        TargetRecord {
            temperature_celsius: 21.5,
            relative_humidity: 55.0,
            red: 0.8,
            blue: 0.4,
            white: 1.0,
        }
    );
}

#[test]
fn target_record_decode_fails_on_missing_field() {
    // 부분 레코드는 성공으로 취급하지 않는다 (조회 실패와 동일하게 처리).
    let body = r#"{"temperature_celsius": 21.5, "relative_humidity": 55.0}"#;
    assert!(serde_json::from_str::<TargetRecord>(body).is_err());
}

#[test]
fn reading_encodes_expected_fields() {
    let reading = Reading {
        temperature_celsius: 12.6968,
        relative_humidity: 70.0,
        red: 1.0,
        blue: 1.0,
        white: 1.0,
    };
    let value = serde_json::to_value(&reading).expect("encode reading");
    assert_eq!(value["temperature_celsius"], 12.6968);
    assert_eq!(value["relative_humidity"], 70.0);
    assert_eq!(value["red"], 1.0);
    assert_eq!(value["blue"], 1.0);
    assert_eq!(value["white"], 1.0);
}

#[test]
fn jsonl_sink_appends_one_parseable_line_per_reading() {
    let path = std::env::temp_dir().join(format!(
        "greenhouse_readings_test_{}.jsonl",
        std::process::id()
    ));
    let _ = fs::remove_file(&path);

    let mut sink = JsonlReadingSink::new(&path);
    for rh in [70.0, 70.5] {
        sink.persist(&Reading {
            temperature_celsius: 12.7,
            relative_humidity: rh,
            red: 1.0,
            blue: 1.0,
            white: 1.0,
        })
        .expect("persist reading");
    }

    let content = fs::read_to_string(&path).expect("read log");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    for (line, expected_rh) in lines.iter().zip([70.0, 70.5]) {
        let value: serde_json::Value = serde_json::from_str(line).expect("parse log line");
        assert_eq!(value["relative_humidity"], expected_rh);
    }

    let _ = fs::remove_file(&path);
}
