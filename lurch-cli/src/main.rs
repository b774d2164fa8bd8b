/*!
  Binary for the CLI of the Lurch notation tools: latex2lurch
*/

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use lurch_cli::{cli::CliApp, error::CliError};
use lurch_notation::{
    acid::{AcidSuite, AcidSummary},
    document::Document,
    RuleTable,
};

/// Rewrite `input`, logging the matched rules if `report` is set.
fn rewrite_text(table: &RuleTable, input: &str, report: bool) -> String {
    if !report {
        return table.rewrite(input);
    }

    let report = table.rewrite_with_report(input);
    for application in &report.applications {
        log::info!(
            "rule `{}` matched {} time{}",
            application.rule,
            application.matches,
            if application.matches == 1 { "" } else { "s" }
        );
    }
    log::info!("{} substitutions", report.substitutions());

    report.output
}

fn rewrite_file(file: &Path, table: &RuleTable, cli: &CliApp) -> Result<bool, CliError> {
    let document = Document::load(file)?;
    let rewritten = if cli.report {
        Document::new(
            document.name().to_owned(),
            rewrite_text(table, document.content(), true),
        )
    } else {
        document.rewrite(table)
    };

    let changed = rewritten.content() != document.content();

    if cli.in_place {
        if changed {
            log::info!("writing updated file {file:?}");
            rewritten.save(file)?;
        } else {
            log::info!("{file:?} is unchanged");
        }
    } else {
        print!("{}", rewritten.content());
    }

    Ok(changed)
}

fn run_acid(suites: &[PathBuf], table: &RuleTable) -> Result<(), CliError> {
    let mut summary = AcidSummary::default();

    for path in suites {
        let suite = AcidSuite::load(path)?;
        println!("{}", suite.name.bold());

        let outcomes = suite.run(table);
        for outcome in &outcomes {
            if outcome.passed() {
                println!("   {} {outcome}", "PASS".green().bold());
            } else {
                println!("   {} {outcome}", "FAIL".red().bold());
            }
        }

        summary = summary.merge(AcidSummary::from_outcomes(&outcomes));
    }

    println!(
        "{} of {} acid tests passed",
        summary.passed.to_string().green().bold(),
        summary.total()
    );

    if summary.all_passed() {
        Ok(())
    } else {
        Err(CliError::AcidFailures {
            failed: summary.failed,
            total: summary.total(),
        })
    }
}

fn run(cli: CliApp) -> Result<(), CliError> {
    let table = cli.rule_table()?;
    log::debug!("using {} rules", table.len());

    if cli.list_rules {
        print!("{table}");
        return Ok(());
    }

    if !cli.acid.is_empty() {
        return run_acid(&cli.acid, &table);
    }

    if let Some(expression) = &cli.expression {
        println!("{}", rewrite_text(&table, expression, cli.report));
        return Ok(());
    }

    if cli.files.is_empty() {
        log::info!("reading from standard input");
        let input = std::io::read_to_string(std::io::stdin())?;
        print!("{}", rewrite_text(&table, &input, cli.report));
        return Ok(());
    }

    let mut changed = 0;
    for file in &cli.files {
        if rewrite_file(file, &table, &cli)? {
            changed += 1;
        }
    }
    log::info!("{changed} of {} documents changed", cli.files.len());

    Ok(())
}

fn main() {
    let cli = CliApp::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", clap::crate_version!());
    log::debug!("Documents: {:?}", cli.files);

    run(cli).unwrap_or_else(|err| {
        log::error!("{} {err}", "error:".red().bold());
        std::process::exit(1)
    })
}
