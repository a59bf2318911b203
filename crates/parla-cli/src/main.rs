//! ParlaMint converter CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use parla_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use parla_cli::commands::{run_inspect, run_normalize_ids, run_prepare, run_render};
use parla_cli::logging::{LogConfig, LogFormat, init_logging};
use parla_cli::summary::{
    print_inspect, print_inspect_json, print_normalized, print_prepare_summary, print_render_summary,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match &cli.command {
        Command::Prepare(args) => run_prepare(args).map(|result| {
            print_prepare_summary(&result);
            0
        }),
        Command::Render(args) => run_render(args).map(|result| {
            print_render_summary(&result);
            0
        }),
        Command::Inspect(args) => run_inspect(args).and_then(|result| {
            if args.json {
                print_inspect_json(&result)?;
            } else {
                print_inspect(&result);
            }
            Ok(0)
        }),
        Command::NormalizeId(args) => {
            let ids = run_normalize_ids(&args.ids);
            print_normalized(&ids);
            Ok(if ids.iter().all(|id| id.result.is_ok()) { 0 } else { 1 })
        }
    };
    let exit_code = match outcome {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
