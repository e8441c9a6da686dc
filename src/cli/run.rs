use anyhow::{Context, Result};
use std::process::ExitCode;

use super::args::Cli;
use crate::core::{FilterError, RunConfig, StatsFormat};
use crate::reporting::{ConsoleRunReporter, RunReporter};
use crate::storage::{local::LocalFileStore, FileStore};
use crate::{App, RunOutcome};

/// `RUST_LOG` 未設定時のログフィルタ
///
/// 失敗は `ConsoleRunReporter` が標準エラーに出すため、`warn` 以下の
/// tracing イベントは既定では表示しない。
pub const DEFAULT_LOG_FILTER: &str = "error";

/// 実行全体の終了状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// 一部の入力・出力ファイルで失敗したが、残りは処理した
    PartialFailure,
    /// 入力ファイルが指定されていない
    NoInput,
}

impl RunStatus {
    pub const fn code(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::PartialFailure => 1,
            Self::NoInput => 2,
        }
    }

    fn of(outcome: &RunOutcome) -> Self {
        if outcome.has_failures() {
            Self::PartialFailure
        } else {
            Self::Success
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// CLI引数から実行し、統計を標準出力に表示する
pub async fn execute_run(cli: Cli) -> Result<RunStatus> {
    let config = cli.to_config();
    let reporter = if cli.verbose {
        ConsoleRunReporter::verbose()
    } else {
        ConsoleRunReporter::new()
    };
    let app = App::new(LocalFileStore::new(), reporter);

    let (status, report) = run_with_app(&app, &config).await?;
    if let Some(report) = report {
        print!("{report}");
    }
    Ok(status)
}

/// パイプラインを実行し、終了状態と統計の表示内容を返す
///
/// 入力が一つもない場合はエラーを標準エラー出力に表示して `RunStatus::NoInput`。
pub async fn run_with_app<S, R>(
    app: &App<S, R>,
    config: &RunConfig,
) -> Result<(RunStatus, Option<String>)>
where
    S: FileStore,
    R: RunReporter,
{
    let outcome = match app.run(config).await {
        Ok(outcome) => outcome,
        Err(error @ FilterError::NoInputFiles) => {
            eprintln!("❌ Error: {error}");
            return Ok((RunStatus::NoInput, None));
        }
        Err(error) => return Err(error.into()),
    };

    let report = render_statistics(&outcome, config)?;
    Ok((RunStatus::of(&outcome), report))
}

/// 設定された詳細度と形式で統計を表示用文字列にする
pub fn render_statistics(outcome: &RunOutcome, config: &RunConfig) -> Result<Option<String>> {
    let statistics = outcome.statistics();
    match config.stats_format() {
        StatsFormat::Text => {
            let text = statistics.render_text(config.stats());
            Ok((!text.is_empty()).then_some(text))
        }
        StatsFormat::Json => Ok(statistics
            .to_json(config.stats())
            .context("Failed to render statistics as JSON")?
            .map(|json| json + "\n")),
    }
}
