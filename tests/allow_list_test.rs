use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_allow_list_from_file_replaces_builtin() {
    let allow_list = common::write_lines(&[r#"["0811111111"]"#.to_string()]);
    let requests = common::write_lines(&[
        common::request_line(1, 1.0, "0811111111"),
        common::request_line(1, 1.0, "081293846571"),
    ]);

    let mut cmd = Command::new(cargo_bin!("ewallet-ledger"));
    cmd.arg(requests.path())
        .arg("--allow-list")
        .arg(allow_list.path());

    let assert = cmd.assert().success();
    let receipts = common::parse_receipts(&assert.get_output().stdout);

    assert_eq!(receipts[0]["status"], "SUCCESS");
    assert_eq!(receipts[1]["status"], "FAILED");
}

#[test]
fn test_empty_allow_list_fails_startup() {
    let allow_list = common::write_lines(&["[]".to_string()]);
    let requests = common::write_lines(&[common::request_line(1, 1.0, "0811111111")]);

    Command::new(cargo_bin!("ewallet-ledger"))
        .arg(requests.path())
        .arg("--allow-list")
        .arg(allow_list.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("contains no phone numbers"));
}
