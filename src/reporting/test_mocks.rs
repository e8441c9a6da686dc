// テスト用の報告モック実装

use super::traits::RunReporter;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// 受け取ったイベントを記録するだけの実装
#[derive(Clone, Default)]
pub struct RecordingRunReporter {
    pub inputs_read: Arc<Mutex<Vec<(PathBuf, usize)>>>,
    pub input_errors: Arc<Mutex<Vec<(PathBuf, String)>>>,
    pub outputs_written: Arc<Mutex<Vec<(PathBuf, usize)>>>,
    pub output_errors: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl RecordingRunReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RunReporter for RecordingRunReporter {
    async fn report_input_read(&self, path: &Path, lines: usize) {
        self.inputs_read.lock().unwrap().push((path.to_path_buf(), lines));
    }

    async fn report_input_error(&self, path: &Path, error: &str) {
        self.input_errors
            .lock()
            .unwrap()
            .push((path.to_path_buf(), error.to_string()));
    }

    async fn report_output_written(&self, path: &Path, lines: usize) {
        self.outputs_written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), lines));
    }

    async fn report_output_error(&self, path: &Path, error: &str) {
        self.output_errors
            .lock()
            .unwrap()
            .push((path.to_path_buf(), error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_reporter_keeps_events_in_order() {
        let reporter = RecordingRunReporter::new();

        reporter.report_input_read(Path::new("a.txt"), 3).await;
        reporter.report_input_error(Path::new("b.txt"), "missing").await;
        reporter.report_output_written(Path::new("integers.txt"), 2).await;

        assert_eq!(
            *reporter.inputs_read.lock().unwrap(),
            vec![(PathBuf::from("a.txt"), 3)]
        );
        assert_eq!(reporter.input_errors.lock().unwrap()[0].1, "missing");
        assert_eq!(reporter.outputs_written.lock().unwrap().len(), 1);
        assert!(reporter.output_errors.lock().unwrap().is_empty());
    }
}
