//! Contains structures and functionality for the binary
use std::path::PathBuf;

use lurch_notation::{config::RuleTableConfig, error::Error, RuleTable};

/// Environment variable holding the default log filter
const LOG_ENVIRONMENT_VARIABLE: &str = "LURCH_LOG";

/// Cli Arguments related to logging
#[derive(clap::Args, Debug)]
pub struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::builder::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(long = "log", value_parser=clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]), group = "verbosity")]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Initialising Logging
    ///
    /// Sets the logging verbosity to the given log-level in the following order:
    ///  * `Info`, `Debug`, `Trace`; depending on the count of `-v`
    ///  * `Error` when `-q` is used
    ///  * The `LURCH_LOG` environment variable value
    ///  * `Warn` otherwise
    pub fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();

        // Default log level
        builder.filter_level(log::LevelFilter::Warn);

        builder.parse_env(LOG_ENVIRONMENT_VARIABLE);
        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            });
        }
        builder.init();
    }
}

/// Rewrite LaTeX-flavoured mathematics into Lurch notation
#[derive(clap::Parser, Debug)]
#[command(name = "latex2lurch", author, version, about)]
pub struct CliApp {
    /// Documents to rewrite; standard input is read if none are given
    #[arg(value_parser)]
    pub files: Vec<PathBuf>,
    /// Rewrite a single expression and print the result
    #[arg(short, long = "expr", conflicts_with_all = ["files", "acid"])]
    pub expression: Option<String>,
    /// Overwrite each document with its rewritten content instead of printing it
    #[arg(short, long = "in-place", requires = "files")]
    pub in_place: bool,
    /// Rule table configuration (JSON) to use instead of the built-in LaTeX table
    #[arg(short, long = "rules")]
    pub rules: Option<PathBuf>,
    /// Run the given acid test suites (JSON) against the rule table
    #[arg(long = "acid", num_args = 1.., conflicts_with = "files")]
    pub acid: Vec<PathBuf>,
    /// Log which rules matched and how often
    #[arg(long = "report")]
    pub report: bool,
    /// Print the rule table in application order and exit
    #[arg(long = "list-rules")]
    pub list_rules: bool,
    /// Arguments related to logging
    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl CliApp {
    /// The rule table selected by the `--rules` option.
    pub fn rule_table(&self) -> Result<RuleTable, Error> {
        match &self.rules {
            Some(path) => RuleTableConfig::load(path)?.into_table(),
            None => Ok(RuleTable::latex()),
        }
    }
}
