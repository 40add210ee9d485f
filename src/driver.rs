//! 実行ドライバ
//!
//! レジストリの宣言順にエンティティを1つずつ処理する。選択されていない
//! エンティティは黙って飛ばし、選択済みでもエクスポートファイルが
//! 無ければスキップとして報告する。インポーターの失敗は隔離せず、
//! 最初の失敗で残りの計画ごと中断する。

use crate::error::Result;
use crate::importer::ImporterSet;
use crate::invocation::{build_args, InvocationOptions};
use crate::registry::Registry;
use std::path::PathBuf;

/// 1回の実行に対するオプション
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// エクスポートディレクトリ
    pub directory: PathBuf,
    /// インポーターを一切起動しない
    pub dry_run: bool,
    /// エンティティ固有引数の元になる指定
    pub invocation: InvocationOptions,
}

/// 処理されたエンティティの終端状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportAction {
    /// インポーターを起動して完了した
    Executed,
    /// dry-runのため起動しなかった
    DryRun,
    /// エクスポートファイルが無くスキップした
    SkippedMissingFile,
}

/// 実行計画の1行
#[derive(Debug, Clone)]
pub struct PlanEntry {
    pub entity: &'static str,
    pub args: Vec<String>,
    pub action: ImportAction,
}

/// 1回の実行の結果（永続化しない）
#[derive(Debug, Clone, Default)]
pub struct ExecutionReport {
    pub entries: Vec<PlanEntry>,
    pub dry_run: bool,
}

impl ExecutionReport {
    /// 実際に取り込んだ数
    pub fn executed_count(&self) -> usize {
        self.count(ImportAction::Executed)
    }

    /// 取り込んだ（またはdry-runで取り込むはずだった）数
    pub fn planned_count(&self) -> usize {
        self.count(ImportAction::Executed) + self.count(ImportAction::DryRun)
    }

    /// ファイル欠落でスキップした数
    pub fn skip_count(&self) -> usize {
        self.count(ImportAction::SkippedMissingFile)
    }

    /// 1件も処理対象が無かったか
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn count(&self, action: ImportAction) -> usize {
        self.entries.iter().filter(|e| e.action == action).count()
    }
}

/// 選択済みエンティティを宣言順に取り込む
pub fn run(
    registry: &Registry,
    opts: &RunOptions,
    importers: &dyn ImporterSet,
) -> Result<ExecutionReport> {
    let mut report = ExecutionReport {
        entries: Vec::new(),
        dry_run: opts.dry_run,
    };

    for entry in registry.entries() {
        if !entry.is_selected() {
            continue;
        }

        let csv_file = opts.directory.join(format!("{}.csv", entry.export_file));
        let args = build_args(entry.name, &opts.directory, &csv_file, &opts.invocation);
        println!("Import {:<20} using {}", entry.name, args.join(" "));

        if !csv_file.exists() {
            println!("...SKIPPING, no file {} available.", csv_file.display());
            report.entries.push(PlanEntry {
                entity: entry.name,
                args,
                action: ImportAction::SkippedMissingFile,
            });
            continue;
        }

        let action = if opts.dry_run {
            ImportAction::DryRun
        } else {
            importers.importer_for(entry.importer).run(&args)?;
            ImportAction::Executed
        };
        report.entries.push(PlanEntry {
            entity: entry.name,
            args,
            action,
        });
    }

    Ok(report)
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
