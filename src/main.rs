use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use data_filter::cli::{execute_run, Cli, DEFAULT_LOG_FILTER};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 診断ログは RUST_LOG で有効化（既定ではエラーのみ）
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_lenient();

    match execute_run(cli).await {
        Ok(status) => status.into(),
        Err(error) => {
            eprintln!("❌ Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
