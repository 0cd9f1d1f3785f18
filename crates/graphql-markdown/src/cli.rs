use crate::commands::CommandEnum;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Generates Markdown documentation from GraphQL schema files.
#[derive(clap::Parser, Debug)]
#[command(arg_required_else_help = true, name = "graphql-markdown", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: CommandEnum,

    /// Log at debug level. Overrides `LOG_LEVEL`.
    #[arg(global = true, long, short = 'v')]
    pub(crate) verbose: bool,
}
impl Cli {
    /// Level from `--verbose`, else from the `LOG_LEVEL` environment variable
    /// (any `tracing` level name, or `verbose`). An unrecognized value is
    /// returned alongside the default level so it can be reported once
    /// logging is up.
    pub(crate) fn log_level(&self) -> (tracing::Level, Option<String>) {
        if self.verbose {
            return (tracing::Level::DEBUG, None);
        }
        match std::env::var("LOG_LEVEL") {
            Ok(env_val) => parse_log_level(&env_val),
            Err(_) => (DEFAULT_LOG_LEVEL, None),
        }
    }
}

fn parse_log_level(env_val: &str) -> (tracing::Level, Option<String>) {
    let env_val = env_val.trim();
    if env_val.eq_ignore_ascii_case("verbose") {
        return (tracing::Level::DEBUG, None);
    }
    match env_val.parse::<tracing::Level>() {
        Ok(level) => (level, None),
        Err(_) => (
            DEFAULT_LOG_LEVEL,
            Some(format!("Invalid `LOG_LEVEL` environment variable value: `{env_val}`")),
        ),
    }
}
