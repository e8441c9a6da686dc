// 実行設定
// CLI引数から一度だけ構築され、以降は読み取り専用

use std::path::{Path, PathBuf};

/// 出力ファイルの書き込みモード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// 作成または切り詰めて上書き
    #[default]
    Overwrite,
    /// 作成または末尾に追記
    Append,
}

/// 統計表示の詳細度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum StatsLevel {
    #[default]
    None,
    /// 件数のみ
    Short,
    /// 件数に加えて最小・最大・合計・平均（文字列は長さ）
    Full,
}

impl StatsLevel {
    /// `-s` / `-f` フラグから詳細度を決定する（`-f` が優先）
    pub fn from_flags(short: bool, full: bool) -> Self {
        if full {
            Self::Full
        } else if short {
            Self::Short
        } else {
            Self::None
        }
    }
}

/// 統計の出力形式
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsFormat {
    #[default]
    Text,
    Json,
}

/// 1回の実行の設定
#[derive(Debug, Clone)]
pub struct RunConfig {
    inputs: Vec<PathBuf>,
    output_dir: PathBuf,
    prefix: String,
    write_mode: WriteMode,
    stats: StatsLevel,
    stats_format: StatsFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output_dir: PathBuf::from("."),
            prefix: String::new(),
            write_mode: WriteMode::default(),
            stats: StatsLevel::default(),
            stats_format: StatsFormat::default(),
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs<I, P>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.inputs = inputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn with_stats(mut self, stats: StatsLevel) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_stats_format(mut self, stats_format: StatsFormat) -> Self {
        self.stats_format = stats_format;
        self
    }

    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    pub fn stats(&self) -> StatsLevel {
        self.stats
    }

    pub fn stats_format(&self) -> StatsFormat {
        self.stats_format
    }

    /// 出力ファイルのパス: `output_dir/<prefix><base_filename>`
    pub fn output_path(&self, base_filename: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}{}", self.prefix, base_filename))
    }
}
