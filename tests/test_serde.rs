#![cfg(feature = "serde")]

use nullcolumn::*;

#[test]
fn test_json_round_trip() {
    let mut column = Column::from(vec![1_i32, 2, 3]);
    column.reset(1);
    let json = serde_json::to_string(&column).unwrap();
    let back: Column<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, column);
}

#[test]
fn test_json_layout() {
    let json = serde_json::to_string(&Nullable::Value(1.5)).unwrap();
    assert_eq!(json, r#"{"Value":1.5}"#);
    let json = serde_json::to_string(&Nullable::<f64>::Null).unwrap();
    assert_eq!(json, r#""Null""#);
    let column = Column::from_nullables([Nullable::Null, Nullable::Value(true)]);
    let json = serde_json::to_string(&column).unwrap();
    assert_eq!(json, r#"["Null",{"Value":true}]"#);
}

#[test]
fn test_bincode_round_trip() {
    let mut column = Column::from(vec!["a".to_string(), "b".to_string()]);
    column.push_null();
    let config = bincode::config::standard();
    let bytes = bincode::serde::encode_to_vec(&column, config).unwrap();
    let (back, _): (Column<String>, usize) =
        bincode::serde::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(back, column);
}
