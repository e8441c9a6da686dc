// 分類結果の書き出し
// 3つの出力ファイルはそれぞれ独立して書き込み、1つの失敗で他を止めない

use std::path::PathBuf;

use crate::aggregation::RunState;
use crate::core::{Category, FilterError, FilterResult, RunConfig};
use crate::reporting::RunReporter;
use crate::storage::FileStore;

/// 書き出し処理全体の結果
#[derive(Debug, Default)]
pub struct WriteSummary {
    /// 書き込んだファイルと行数
    pub written: Vec<(PathBuf, usize)>,
    /// 空のため書き込まなかったカテゴリ
    pub skipped: Vec<Category>,
    pub failures: Vec<FilterError>,
}

impl WriteSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// ストアと報告先を借用して結果を書き出す
pub struct ResultWriter<'a, S, R>
where
    S: FileStore,
    R: RunReporter,
{
    store: &'a S,
    reporter: &'a R,
}

impl<'a, S, R> ResultWriter<'a, S, R>
where
    S: FileStore,
    R: RunReporter,
{
    pub fn new(store: &'a S, reporter: &'a R) -> Self {
        Self { store, reporter }
    }

    /// integers → floats → strings の順に書き出す
    pub async fn write_all(&self, state: &RunState, config: &RunConfig) -> WriteSummary {
        let mut summary = WriteSummary::default();

        for category in Category::ALL {
            match self.write_category(category, state, config).await {
                Ok(Some(written)) => summary.written.push(written),
                Ok(None) => summary.skipped.push(category),
                Err(error) => {
                    if let Some(path) = error.path() {
                        self.reporter
                            .report_output_error(path, &error.to_string())
                            .await;
                    }
                    summary.failures.push(error);
                }
            }
        }

        summary
    }

    /// 1カテゴリを書き出す。空なら何もせず `Ok(None)`
    ///
    /// 空のカテゴリでは既存の出力ファイルにも触れない。
    pub async fn write_category(
        &self,
        category: Category,
        state: &RunState,
        config: &RunConfig,
    ) -> FilterResult<Option<(PathBuf, usize)>> {
        if state.len(category) == 0 {
            tracing::debug!(?category, "nothing to write");
            return Ok(None);
        }

        let path = config.output_path(category.base_filename());
        let lines = state.rendered(category);

        self.store
            .write_lines(&path, &lines, config.write_mode())
            .await
            .map_err(|source| FilterError::output_write(&path, source))?;

        self.reporter.report_output_written(&path, lines.len()).await;
        Ok(Some((path, lines.len())))
    }
}
