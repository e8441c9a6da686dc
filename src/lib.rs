pub mod aggregation;
pub mod classifier;
pub mod cli;
pub mod core;
pub mod persistence;
pub mod reporting;
pub mod storage;

use std::path::PathBuf;

use aggregation::RunState;
use crate::core::{FilterError, FilterResult, RunConfig};
use persistence::{ResultWriter, WriteSummary};
use reporting::{RunReporter, Statistics};
use storage::FileStore;

/// 1回の実行結果
#[derive(Debug)]
pub struct RunOutcome {
    pub state: RunState,
    /// 読み込めずスキップした入力ファイル
    pub read_failures: Vec<FilterError>,
    pub write_summary: WriteSummary,
}

impl RunOutcome {
    /// 入力・出力のいずれかで失敗があったか
    pub fn has_failures(&self) -> bool {
        !self.read_failures.is_empty() || self.write_summary.has_failures()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::compute(&self.state)
    }
}

// 依存関係を直接所有するアプリケーション本体
// ファイルアクセスと報告先はコンストラクタで注入する
pub struct App<S, R>
where
    S: FileStore,
    R: RunReporter,
{
    pub store: S,
    pub reporter: R,
}

impl<S, R> App<S, R>
where
    S: FileStore,
    R: RunReporter,
{
    pub fn new(store: S, reporter: R) -> Self {
        Self { store, reporter }
    }

    /// 入力 → 分類 → 書き出し を順に実行する
    ///
    /// 入力が一つもなければ何もせず `FilterError::NoInputFiles`。
    /// ファイル単位の失敗は `RunOutcome` に集められる。
    pub async fn run(&self, config: &RunConfig) -> FilterResult<RunOutcome> {
        if config.inputs().is_empty() {
            return Err(FilterError::NoInputFiles);
        }

        let (state, read_failures) = self.ingest(config.inputs()).await;
        tracing::debug!(
            integers = state.integers.len(),
            floats = state.floats.len(),
            strings = state.strings.len(),
            "classification finished"
        );

        let write_summary = ResultWriter::new(&self.store, &self.reporter)
            .write_all(&state, config)
            .await;

        Ok(RunOutcome {
            state,
            read_failures,
            write_summary,
        })
    }

    /// 入力ファイルを指定順に読み込んで分類する
    ///
    /// 読み込めないファイルは報告してスキップし、それまでの分類結果は保持する。
    pub async fn ingest(&self, inputs: &[PathBuf]) -> (RunState, Vec<FilterError>) {
        let mut state = RunState::new();
        let mut failures = Vec::new();

        for path in inputs {
            match self.store.read(path).await {
                Ok(bytes) => {
                    let lines = state.ingest_text(&String::from_utf8_lossy(&bytes));
                    self.reporter.report_input_read(path, lines).await;
                }
                Err(source) => {
                    let error = FilterError::input_read(path, source);
                    self.reporter
                        .report_input_error(path, &error.to_string())
                        .await;
                    failures.push(error);
                }
            }
        }

        (state, failures)
    }
}
