//! エンティティレジストリ
//!
//! 取り込み対象として理解しているエンティティの静的なテーブル。
//! テーブルの並び順がそのまま実行順になる。依存先が依存元より
//! 必ず先に並ぶことはテーブル定義側の不変条件（テストで検証）。

use crate::error::{Result, SwimError};
use crate::importer::ImporterId;

/// 1エンティティ分の定義
#[derive(Debug)]
pub struct EntityDescriptor {
    /// 一意なエンティティ名
    pub name: &'static str,
    /// エクスポートファイル名（`.csv` 拡張子なし、ディレクトリ相対）
    pub export_file: &'static str,
    /// 担当インポーター
    pub importer: ImporterId,
    /// 直接の依存先エンティティ名
    pub depends_on: Option<&'static str>,
    selected: bool,
}

impl EntityDescriptor {
    const fn new(
        name: &'static str,
        export_file: &'static str,
        importer: ImporterId,
        depends_on: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            export_file,
            importer,
            depends_on,
            selected: false,
        }
    }

    /// 今回の実行で処理対象になっているか
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// エンティティレジストリ
///
/// `selected` フラグ以外は実行中に変化しない。フラグは実行開始時に
/// すべてfalseで、展開フェーズでのみ書き換えられる。
pub struct Registry {
    entries: Vec<EntityDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        // 宣言順 = 実行順
        Self {
            entries: vec![
                EntityDescriptor::new("organization", "users", ImporterId::Organization, None),
                EntityDescriptor::new("user", "users", ImporterId::User, Some("organization")),
                EntityDescriptor::new(
                    "host-collection",
                    "system-groups",
                    ImporterId::SystemGroup,
                    Some("organization"),
                ),
                EntityDescriptor::new(
                    "repository-enable",
                    "channels",
                    ImporterId::RepositoryEnable,
                    Some("organization"),
                ),
                EntityDescriptor::new(
                    "repository",
                    "repositories",
                    ImporterId::Repository,
                    Some("organization"),
                ),
                EntityDescriptor::new(
                    "content-view",
                    "CHANNELS/export",
                    ImporterId::LocalRepository,
                    Some("repository"),
                ),
                EntityDescriptor::new(
                    "activation-key",
                    "activation-keys",
                    ImporterId::ActivationKey,
                    Some("organization"),
                ),
                EntityDescriptor::new(
                    "template-snippet",
                    "kickstart-scripts",
                    ImporterId::TemplateSnippet,
                    None,
                ),
            ],
        }
    }

    /// エンティティ名を宣言順で返す
    pub fn list(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    /// 宣言順の全エントリ
    pub fn entries(&self) -> &[EntityDescriptor] {
        &self.entries
    }

    /// 名前からエンティティ定義を引く
    pub fn describe(&self, name: &str) -> Result<&EntityDescriptor> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| SwimError::UnknownEntity(name.to_string()))
    }

    /// エンティティを処理対象に加える（冪等）
    pub fn mark_selected(&mut self, name: &str) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| SwimError::UnknownEntity(name.to_string()))?;
        entry.selected = true;
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
