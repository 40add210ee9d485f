use owo_colors::OwoColorize;

use crate::driver::ExecutionReport;

pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    pub fn format(report: &ExecutionReport) -> Self {
        let verb = if report.dry_run {
            "Would import"
        } else {
            "Imported"
        };
        let planned = report.planned_count();
        let skipped = report.skip_count();

        match (planned, skipped) {
            (0, 0) => Self {
                prefix: "•".yellow().to_string(),
                message: "No entities selected".to_string(),
            },
            (_, s) if s > 0 => Self {
                prefix: "•".yellow().to_string(),
                message: format!(
                    "{verb} {} entity(s), {} skipped",
                    planned.green(),
                    s.yellow()
                ),
            },
            _ => Self {
                prefix: "✓".green().to_string(),
                message: format!("{verb} {} entity(s)", planned.green()),
            },
        }
    }
}
