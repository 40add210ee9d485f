//! 選択フラグの展開
//!
//! ユーザーが要求したエンティティ集合をレジストリの `selected` フラグに
//! 反映し、選択済みエンティティの直接の依存先を追加で選択する。

use crate::error::Result;
use crate::registry::Registry;

/// 全エンティティを選択する特別トークン
pub const ALL: &str = "all";

/// 要求されたエンティティ集合をレジストリへ展開する
///
/// 依存先の伝播は1ホップのみ。依存先の依存先は、その依存先自身が
/// 要求されていない限り選択されない（全テーブルを1回走査するだけで、
/// 再帰的な推移閉包は取らない）。
pub fn expand(registry: &mut Registry, requested: &[String]) -> Result<()> {
    if requested.iter().any(|r| r == ALL) {
        let names: Vec<&'static str> = registry.list().collect();
        for name in names {
            registry.mark_selected(name)?;
        }
    } else {
        for name in requested {
            registry.mark_selected(name)?;
        }
    }

    let prerequisites: Vec<&'static str> = registry
        .entries()
        .iter()
        .filter(|e| e.is_selected())
        .filter_map(|e| e.depends_on)
        .collect();
    for name in prerequisites {
        registry.mark_selected(name)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;

#[cfg(test)]
#[path = "selection_proptests.rs"]
mod proptests;
