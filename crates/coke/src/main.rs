mod cli;
mod command;
mod command_result;
mod commands;
mod input_utils;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{} {e:#}", output_utils::RED_X);
                std::process::ExitCode::FAILURE
            },
        }
    }
}

/// Name of the environment variable that sets the log level when
/// `--verbose` is not given.
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var(LOG_LEVEL_ENV_VAR).ok();
    let (log_level, warning) = resolve_log_level(cli.verbose, env_val.as_deref());

    // stdout is reserved for command output.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// Picks the log level from `--verbose` or the `LOG_LEVEL` value.
///
/// Level names are case-insensitive; `verbose` is an alias for `debug`.
/// An unrecognized value falls back to the default level and yields a
/// warning to log once the subscriber is installed.
fn resolve_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }
    let Some(raw) = env_val else {
        return (DEFAULT_LOG_LEVEL, None);
    };
    let level = match raw.trim().to_ascii_lowercase().as_str() {
        "" => DEFAULT_LOG_LEVEL,
        "trace" => tracing::Level::TRACE,
        "debug" | "verbose" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" | "warning" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => {
            return (
                DEFAULT_LOG_LEVEL,
                Some(format!(
                    "Invalid `{LOG_LEVEL_ENV_VAR}` environment variable value: \
                    `{raw}`"
                )),
            );
        },
    };
    (level, None)
}

#[cfg(test)]
mod tests {
    use super::resolve_log_level;
    use super::DEFAULT_LOG_LEVEL;
    use tracing::Level;

    /// `--verbose` wins over the environment.
    #[test]
    fn verbose_flag_overrides_env() {
        assert_eq!(resolve_log_level(true, Some("error")), (Level::DEBUG, None));
    }

    /// Level names match in any case, with surrounding whitespace ignored.
    #[test]
    fn env_levels_are_case_insensitive() {
        for (raw, expected) in [
            ("TRACE", Level::TRACE),
            ("Debug", Level::DEBUG),
            (" verbose ", Level::DEBUG),
            ("info", Level::INFO),
            ("Warn", Level::WARN),
            ("ERROR", Level::ERROR),
        ] {
            assert_eq!(resolve_log_level(false, Some(raw)), (expected, None), "for {raw:?}");
        }
    }

    /// Unset or empty values use the default without a warning.
    #[test]
    fn missing_env_uses_default() {
        assert_eq!(resolve_log_level(false, None), (DEFAULT_LOG_LEVEL, None));
        assert_eq!(resolve_log_level(false, Some("  ")), (DEFAULT_LOG_LEVEL, None));
    }

    /// Unknown values fall back to the default and produce a warning.
    #[test]
    fn invalid_env_warns() {
        let (level, warning) = resolve_log_level(false, Some("loud"));
        assert_eq!(level, DEFAULT_LOG_LEVEL);
        assert_eq!(
            warning.as_deref(),
            Some("Invalid `LOG_LEVEL` environment variable value: `loud`"),
        );
    }
}
