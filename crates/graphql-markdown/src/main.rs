mod cli;
mod command;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::CommandResult;
pub(crate) use command::RunnableCommand;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    setup_logger(&cli);

    let result = cli.cmd.run().await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

fn setup_logger(cli: &Cli) {
    let (level, warning) = cli.log_level();

    // Documents go to stdout, so logs must not.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
