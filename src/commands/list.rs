//! `--list-entities` の処理
//!
//! 理解しているエンティティ名を宣言順（= 実行順）で表示する。
//! 取り込みの副作用はない。

use crate::registry::Registry;

pub fn run() -> Result<(), String> {
    let registry = Registry::new();

    println!("Entities I understand:");
    for name in registry.list() {
        println!("  {name}");
    }

    Ok(())
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
