use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::batch::Batch;
use crate::core::notify::ConsoleNotifier;
use crate::core::scan::ScanSettings;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::ScanSummary;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::path::{expand_tilde, short_name};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;
use std::path::Path;

/// Handle the `scan` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Scan {
        path,
        window,
        report,
        format,
        force,
        no_prompt,
        strict,
    } = &cli.command
    else {
        return Ok(());
    };

    let target = path
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(|| cfg.data_path());

    let mut settings = ScanSettings::from_config(cfg)?;
    if let Some(minutes) = window {
        settings = settings.with_window_minutes(*minutes)?;
    }

    header(format!("Checking {}", target.display()));
    info(format!(
        "Duplicate window: {} (columns: {})",
        format_minutes(settings.window),
        settings.columns.names().join(", ")
    ));

    let mut batch = Batch::run(&target, &settings, &cfg.log_path())?;

    if batch.summary().files.is_empty() {
        warning(format!("No CSV files to process in '{}'", target.display()));
        return Ok(());
    }

    print_summary(batch.summary());

    let interactive = !(*no_prompt || cli.test);
    let mut notifier = ConsoleNotifier::new(cfg.open_log, interactive);
    batch.conclude(&mut notifier)?;

    if !batch.summary().duplicates_found() {
        success("No repeated marks found in the processed files.");
    }

    if let Some(file) = report {
        ExportLogic::export_report(
            batch.summary(),
            batch.diagnostics(),
            *format,
            Path::new(file),
            *force,
        )?;
    }

    info(format!("Log written to {}", batch.log_path().display()));

    if *strict && batch.summary().duplicates_found() {
        return Err(AppError::DuplicatesFound(
            batch.summary().files_with_duplicates(),
        ));
    }

    Ok(())
}

fn print_summary(summary: &ScanSummary) {
    let mut table = Table::new(vec![
        Column::left("File"),
        Column::right("Events"),
        Column::right("Skipped"),
        Column::right("Duplicates"),
        Column::left("Status"),
    ]);

    for f in &summary.files {
        table.add_row(vec![
            short_name(&f.path),
            f.events.to_string(),
            f.skipped.to_string(),
            f.duplicates.to_string(),
            f.status.as_str().to_string(),
        ]);
    }

    println!();
    print!("{}", table.render());
    println!(
        "\n{} file(s): {} events, {} skipped, {} duplicate(s), {} not fully read\n",
        summary.files.len(),
        summary.total_events(),
        summary.total_skipped(),
        summary.total_duplicates(),
        summary.failed_files()
    );
}
