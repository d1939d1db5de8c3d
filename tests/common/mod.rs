#![allow(dead_code)]

use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn request_line(user_id: i64, amount: f64, phone_number: &str) -> String {
    json!({
        "user_id": user_id,
        "amount": amount,
        "description": "test payment",
        "phone_number": phone_number,
    })
    .to_string()
}

pub fn write_lines(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
    file.flush().expect("Failed to flush file");
    file
}

pub fn parse_receipts(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("receipt should be valid JSON"))
        .collect()
}
