//! インポーターへ渡す引数の組み立て
//!
//! どのエンティティも `--csv-file` でデータソースを受け取る。
//! いくつかのエンティティは固有の追加引数を持つ:
//!
//! - `organization` は `--into-org-id` が指定されていれば転送する
//! - `content-view` は汎用パスを無視してCHANNELSサブディレクトリ規約を使う
//! - `user` は新規パスワードの出力ファイル名を生成し、`--merge-users` を転送する

use chrono::{SecondsFormat, Utc};
use std::path::Path;

/// エンティティ固有引数の元になるユーザー指定
#[derive(Debug, Clone, Default)]
pub struct InvocationOptions {
    pub into_org_id: Option<String>,
    pub merge_users: bool,
}

/// 1エンティティ分の呼び出し引数を構築する
///
/// 決定的な文字列構築のみで副作用はない。ただし `user` のタイムスタンプ
/// だけは実行ごとに変わる（テストはパターンで照合する）。
pub fn build_args(
    name: &str,
    directory: &Path,
    csv_file: &Path,
    opts: &InvocationOptions,
) -> Vec<String> {
    let mut args = vec!["--csv-file".to_string(), csv_file.display().to_string()];

    match name {
        "organization" => {
            if let Some(org_id) = &opts.into_org_id {
                args.push("--into-org-id".to_string());
                args.push(org_id.clone());
            }
        }
        "content-view" => {
            let channels = directory.join("CHANNELS");
            args = vec![
                "--csv-file".to_string(),
                channels.join("export.csv").display().to_string(),
                "--dir".to_string(),
                channels.display().to_string(),
            ];
        }
        "user" => {
            let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
            args.push("--new-passwords".to_string());
            args.push(format!("passwords_{stamp}.csv"));
            if opts.merge_users {
                args.push("--merge-users".to_string());
            }
        }
        _ => {}
    }

    args
}

#[cfg(test)]
#[path = "invocation_test.rs"]
mod tests;
