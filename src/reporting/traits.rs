// 実行イベント報告のトレイト定義

use std::path::Path;

/// ファイル単位のイベント報告を抽象化するトレイト
#[async_trait::async_trait]
pub trait RunReporter: Send + Sync {
    /// 入力ファイルを読み込み、分類し終えた
    async fn report_input_read(&self, path: &Path, lines: usize);

    /// 入力ファイルを読み込めなかった（そのファイルはスキップされる）
    async fn report_input_error(&self, path: &Path, error: &str);

    /// 出力ファイルを書き込んだ
    async fn report_output_written(&self, path: &Path, lines: usize);

    /// 出力ファイルを書き込めなかった（他の出力は継続される）
    async fn report_output_error(&self, path: &Path, error: &str);
}
