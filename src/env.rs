//! 環境変数まわりのユーティリティ

use std::path::PathBuf;

/// hammerバイナリを差し替えるための環境変数
pub const HAMMER_BIN_ENV: &str = "SWIM_HAMMER_BIN";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}

/// 委譲先のhammerバイナリを解決する
///
/// `SWIM_HAMMER_BIN` が設定されていればそれを使い、なければPATH上の
/// `hammer` に解決する。
pub fn hammer_bin() -> PathBuf {
    EnvVar::get(HAMMER_BIN_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("hammer"))
}
