use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands, LogLevel};
use commands::CheckArgs;
use license_checker::config::load_config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Check {
            licenses,
            format,
            output,
            on_unknown,
            interactive,
            all,
            exit_zero,
        } => {
            let config = load_config(config_path)?;
            let args = CheckArgs {
                licenses,
                format,
                output,
                on_unknown,
                interactive,
                all,
                exit_zero,
            };
            commands::handle_check(&config, args, cli.quiet)
        }
        Commands::Eval { expression, allow, deny } => {
            let config = load_config(config_path)?;
            commands::handle_eval(&config, &expression, allow, deny)
        }
        Commands::Allow { licenses } => {
            let config = load_config(config_path)?;
            commands::handle_decide(&config, licenses, true, cli.quiet)
        }
        Commands::Deny { licenses } => {
            let config = load_config(config_path)?;
            commands::handle_decide(&config, licenses, false, cli.quiet)
        }
        Commands::Config { show, validate } => {
            commands::handle_config(config_path, show, validate, cli.quiet)
        }
    }
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}
