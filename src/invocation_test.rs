//! 引数組み立てのユニットテスト

use super::*;
use regex::Regex;
use std::path::Path;

fn base_dir() -> &'static Path {
    Path::new("/tmp/exports")
}

#[test]
fn base_args_point_at_the_csv_file() {
    let args = build_args(
        "repository",
        base_dir(),
        Path::new("/tmp/exports/repositories.csv"),
        &InvocationOptions::default(),
    );
    assert_eq!(args, vec!["--csv-file", "/tmp/exports/repositories.csv"]);
}

#[test]
fn organization_without_org_id_has_only_base_args() {
    let args = build_args(
        "organization",
        base_dir(),
        Path::new("/tmp/exports/users.csv"),
        &InvocationOptions::default(),
    );
    assert_eq!(args, vec!["--csv-file", "/tmp/exports/users.csv"]);
}

#[test]
fn organization_forwards_into_org_id() {
    let opts = InvocationOptions {
        into_org_id: Some("3".to_string()),
        merge_users: false,
    };
    let args = build_args(
        "organization",
        base_dir(),
        Path::new("/tmp/exports/users.csv"),
        &opts,
    );
    assert_eq!(
        args,
        vec!["--csv-file", "/tmp/exports/users.csv", "--into-org-id", "3"]
    );
}

#[test]
fn into_org_id_is_ignored_for_other_entities() {
    let opts = InvocationOptions {
        into_org_id: Some("3".to_string()),
        merge_users: false,
    };
    let args = build_args(
        "repository",
        base_dir(),
        Path::new("/tmp/exports/repositories.csv"),
        &opts,
    );
    assert!(!args.contains(&"--into-org-id".to_string()));
}

#[test]
fn content_view_uses_the_channels_convention() {
    // 汎用の解決済みパスは無視される
    let args = build_args(
        "content-view",
        base_dir(),
        Path::new("/tmp/exports/CHANNELS/export.csv"),
        &InvocationOptions::default(),
    );
    assert_eq!(
        args,
        vec![
            "--csv-file",
            "/tmp/exports/CHANNELS/export.csv",
            "--dir",
            "/tmp/exports/CHANNELS",
        ]
    );
}

#[test]
fn user_gets_a_timestamped_passwords_file() {
    let args = build_args(
        "user",
        base_dir(),
        Path::new("/tmp/exports/users.csv"),
        &InvocationOptions::default(),
    );
    assert_eq!(args[2], "--new-passwords");

    let pattern =
        Regex::new(r"^passwords_\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z\.csv$").unwrap();
    assert!(
        pattern.is_match(&args[3]),
        "unexpected passwords file name: {}",
        args[3]
    );
}

#[test]
fn user_merge_flag_is_appended_on_request() {
    let opts = InvocationOptions {
        into_org_id: None,
        merge_users: true,
    };
    let args = build_args("user", base_dir(), Path::new("/tmp/exports/users.csv"), &opts);
    assert_eq!(args.last().unwrap(), "--merge-users");
}

#[test]
fn user_without_merge_request_has_no_merge_flag() {
    let args = build_args(
        "user",
        base_dir(),
        Path::new("/tmp/exports/users.csv"),
        &InvocationOptions::default(),
    );
    assert!(!args.contains(&"--merge-users".to_string()));
}
