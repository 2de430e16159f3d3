//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// A recorded session for 000660 (KRX SK hynix).
///
/// The daily high is 182000 with a 1,200-share wall resting there
/// (218,400,000 in value). A 200-share print at the wall records a
/// condition, then a print at 182500 consumes the wall.
pub const BREAKOUT_SESSION: &str = r#"{"type":"daily_high","code":"000660","high":"182000"}
{"type":"daily_high","code":"005930","high":"71000"}
{"type":"screening","code":"000660","name":"SK hynix","turnover":"512300000000","price":"181500","change_pct":"12.3"}
{"type":"screening","code":"005930","name":"Samsung Electronics","turnover":"498000000000","price":"70100","change_pct":"1.2"}
{"type":"depth","code":"005930","asks":[["71000","9000"]]}
{"type":"depth","code":"000660","asks":[["181500","40"],["182000","1200"],["182500","300"]]}
{"type":"trade","code":"000660","price":"181500","volume":"-50"}
{"type":"trade","code":"000660","price":"-182000","volume":"200"}
not a record
{"type":"trade","code":"000660","price":"182500","volume":"15"}
{"type":"trade","code":"000660","price":"183000","volume":"15"}
"#;

pub fn temp_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("wallbreak-test-")
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

pub fn replay_file(contents: &str) -> NamedTempFile {
    temp_file(contents, ".jsonl")
}

pub fn config_file(contents: &str) -> NamedTempFile {
    temp_file(contents, ".toml")
}
