//! インポーターユニットへの間接参照
//!
//! エンティティごとの取り込み本体は `hammer import` のサブコマンドへ委譲する。
//! 使う側は `ImporterSet` を通じて解決し、具体的な実装を意識しない。
//! テスト時はフェイクの `ImporterSet` を注入して呼び出しを記録できる。

use crate::env;
use crate::error::{Result, SwimError};
use std::path::PathBuf;
use std::process::Command;

/// インポーター種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImporterId {
    Organization,
    User,
    SystemGroup,
    RepositoryEnable,
    Repository,
    LocalRepository,
    ActivationKey,
    TemplateSnippet,
}

impl ImporterId {
    /// 対応する `hammer import` サブコマンド名
    pub fn subcommand(&self) -> &'static str {
        match self {
            ImporterId::Organization => "organization",
            ImporterId::User => "user",
            ImporterId::SystemGroup => "host-collection",
            ImporterId::RepositoryEnable => "repository-enable",
            ImporterId::Repository => "repository",
            ImporterId::LocalRepository => "content-view",
            ImporterId::ActivationKey => "activation-key",
            ImporterId::TemplateSnippet => "template-snippet",
        }
    }
}

impl std::fmt::Display for ImporterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.subcommand())
    }
}

/// インポーターユニットの呼び出し契約
///
/// 構築済みの引数列を受け取り、完了(または失敗)まで制御を渡す。
pub trait Importer: Send + Sync {
    fn run(&self, args: &[String]) -> Result<()>;
}

/// `ImporterId` から `Importer` を解決するファクトリー
pub trait ImporterSet: Send + Sync {
    fn importer_for(&self, id: ImporterId) -> Box<dyn Importer>;
}

/// hammer CLIへ委譲する本番リゾルバ
pub struct HammerImporters {
    program: PathBuf,
}

impl HammerImporters {
    /// 既定のhammerを使う（`SWIM_HAMMER_BIN` で差し替え可）
    pub fn with_defaults() -> Self {
        Self {
            program: env::hammer_bin(),
        }
    }

    /// カスタムバイナリで作成（テスト用）
    pub fn with_program(program: PathBuf) -> Self {
        Self { program }
    }
}

impl ImporterSet for HammerImporters {
    fn importer_for(&self, id: ImporterId) -> Box<dyn Importer> {
        Box::new(HammerImporter {
            program: self.program.clone(),
            id,
        })
    }
}

/// `hammer import <subcommand>` を起動するユニット
struct HammerImporter {
    program: PathBuf,
    id: ImporterId,
}

impl Importer for HammerImporter {
    fn run(&self, args: &[String]) -> Result<()> {
        let status = Command::new(&self.program)
            .arg("import")
            .arg(self.id.subcommand())
            .args(args)
            .status()
            .map_err(|source| SwimError::ImporterSpawn {
                entity: self.id.subcommand().to_string(),
                source,
            })?;

        if !status.success() {
            return Err(SwimError::ImporterFailure {
                entity: self.id.subcommand().to_string(),
                status,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "importer_test.rs"]
mod tests;
