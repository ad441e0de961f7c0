//! End-to-end tests for the `generate-sku` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn generate_sku() -> Command {
    let mut cmd = Command::cargo_bin("generate-sku").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("STOREFRONT_LOG_LEVEL")
        .env_remove("STOREFRONT_LOG_FORMAT");
    cmd
}

#[test]
fn prints_sku_for_known_book() {
    generate_sku()
        .args(["digital-book-test-1", "cae1c9f5-f312-4ed7-8fce-729ba9b64244"])
        .assert()
        .success()
        .stdout("2AB40EF\n");
}

#[test]
fn empty_arguments_are_accepted() {
    generate_sku()
        .args(["", ""])
        .assert()
        .success()
        .stdout("899EC5F\n");
}

#[test]
fn case_of_arguments_is_ignored() {
    generate_sku()
        .args(["ABC", "XYZ"])
        .assert()
        .success()
        .stdout("573C3FF\n");

    generate_sku()
        .args(["abc", "xyz"])
        .assert()
        .success()
        .stdout("573C3FF\n");
}

#[test]
fn missing_partner_is_a_usage_error() {
    generate_sku()
        .arg("digital-book-test-1")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("PARTNER_ID"));
}

#[test]
fn extra_arguments_are_rejected() {
    generate_sku()
        .args(["a", "b", "c"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_named_in_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    generate_sku()
        .arg(OsStr::from_bytes(&[0x62, 0x6f, 0x6f, 0x6b, 0xff]))
        .arg("partner")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("<BOOK_KEY> is not valid UTF-8"));
}

#[test]
fn debug_logging_keeps_stdout_clean() {
    generate_sku()
        .env("STOREFRONT_LOG_LEVEL", "debug")
        .args(["book1", "partnerA"])
        .assert()
        .success()
        .stdout("F432359\n")
        .stderr(predicate::str::contains("Generated SKU"));
}

#[test]
fn invalid_log_format_fails() {
    generate_sku()
        .env("STOREFRONT_LOG_FORMAT", "json")
        .args(["book1", "partnerA"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("STOREFRONT_LOG_FORMAT"));
}
