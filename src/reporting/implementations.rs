// 実行イベント報告の基本実装

use super::traits::RunReporter;
use async_trait::async_trait;
use std::path::Path;

/// コンソール出力による報告実装
///
/// エラーは常に標準エラー出力へ。`verbose` の場合のみ成功イベントも出す。
#[derive(Debug, Default)]
pub struct ConsoleRunReporter {
    verbose: bool,
}

impl ConsoleRunReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

#[async_trait]
impl RunReporter for ConsoleRunReporter {
    async fn report_input_read(&self, path: &Path, lines: usize) {
        tracing::debug!(path = %path.display(), lines, "input classified");
        if self.verbose {
            eprintln!("📄 Read {}: {lines} lines", path.display());
        }
    }

    async fn report_input_error(&self, path: &Path, error: &str) {
        tracing::warn!(path = %path.display(), %error, "input skipped");
        eprintln!("❌ {error}");
    }

    async fn report_output_written(&self, path: &Path, lines: usize) {
        tracing::debug!(path = %path.display(), lines, "output written");
        if self.verbose {
            eprintln!("✅ Wrote {}: {lines} lines", path.display());
        }
    }

    async fn report_output_error(&self, path: &Path, error: &str) {
        tracing::warn!(path = %path.display(), %error, "output failed");
        eprintln!("❌ {error}");
    }
}

/// 何もしない報告実装（テスト用）
#[derive(Debug, Default)]
pub struct NoOpRunReporter;

impl NoOpRunReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RunReporter for NoOpRunReporter {
    async fn report_input_read(&self, _path: &Path, _lines: usize) {
        // 何もしない
    }

    async fn report_input_error(&self, _path: &Path, _error: &str) {
        // 何もしない
    }

    async fn report_output_written(&self, _path: &Path, _lines: usize) {
        // 何もしない
    }

    async fn report_output_error(&self, _path: &Path, _error: &str) {
        // 何もしない
    }
}
