//! swim 取り込みコマンド
//!
//! spacewalk-export形式のディレクトリから、要求されたエンティティと
//! その依存先を決められた順序で取り込む。

use crate::driver::{self, RunOptions};
use crate::importer::HammerImporters;
use crate::invocation::InvocationOptions;
use crate::output::CommandSummary;
use crate::registry::Registry;
use crate::selection;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// stargate-export directory
    #[arg(long, value_name = "DIR_PATH", default_value = "/tmp/exports")]
    pub directory: PathBuf,

    /// Import specific entities
    #[arg(long, value_name = "entity[,entity...]", default_value = "all")]
    pub entities: String,

    /// Import all organizations into one specified by id
    #[arg(long, value_name = "ORG_ID")]
    pub into_org_id: Option<String>,

    /// Merge pre-created users (except admin)
    #[arg(long)]
    pub merge_users: bool,

    /// Show what we would have done, if we'd been allowed
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: Args) -> Result<(), String> {
    // 1. 要求されたエンティティと依存先を選択
    let mut registry = Registry::new();
    let requested: Vec<String> = args.entities.split(',').map(str::to_string).collect();
    selection::expand(&mut registry, &requested).map_err(|e| e.to_string())?;

    // 2. 宣言順に取り込み
    let opts = RunOptions {
        directory: args.directory,
        dry_run: args.dry_run,
        invocation: InvocationOptions {
            into_org_id: args.into_org_id,
            merge_users: args.merge_users,
        },
    };
    let importers = HammerImporters::with_defaults();
    let report = driver::run(&registry, &opts, &importers).map_err(|e| e.to_string())?;

    // 3. サマリー
    let summary = CommandSummary::format(&report);
    println!("\n{} {}", summary.prefix, summary.message);

    Ok(())
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;
