//! check-json — monitoring plugin entry point.
//!
//! Prints one `<name> <STATUS>: <message>` line to stdout and exits with
//! the plugin status code. Diagnostics go to stderr (`RUST_LOG`).

use clap::Parser;
use tracing::debug;

use check_json::{CheckResult, Status, CHECK_NAME};

mod cli;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("check_json=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too and are not failures.
            if e.use_stderr() {
                eprint!("{e}");
                std::process::exit(Status::Unknown.exit_code());
            }
            print!("{e}");
            std::process::exit(Status::Ok.exit_code());
        }
    };

    let config = cli.into_config();
    debug!(url = %config.url, pointer = %config.pointer, "running check");

    let result = check_json::run(&config).await;
    exit_with(&result)
}

fn exit_with(result: &CheckResult) -> ! {
    println!("{}", result.line(CHECK_NAME));
    std::process::exit(result.status.exit_code())
}
