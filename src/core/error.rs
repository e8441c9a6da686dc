// 分類処理のエラー型定義
// 入力・出力ファイル単位の失敗を表現し、致命的かどうかを判定する

use std::path::{Path, PathBuf};
use thiserror::Error;

/// 分類ツール固有のエラー型
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("no input files given (expected one or more *.txt paths)")]
    NoInputFiles,

    #[error("failed to read input file {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to render statistics: {source}")]
    StatsRender {
        #[source]
        source: serde_json::Error,
    },
}

impl FilterError {
    /// 入力読み込みエラーの作成
    pub fn input_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputRead {
            path: path.into(),
            source,
        }
    }

    /// 出力書き込みエラーの作成
    pub fn output_write(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    pub fn stats_render(source: serde_json::Error) -> Self {
        Self::StatsRender { source }
    }

    /// 実行全体を中止すべきエラーかどうか
    ///
    /// 入力が一つも指定されていない場合のみ致命的。ファイル単位の失敗は
    /// 報告した上で残りの処理を継続する。
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NoInputFiles)
    }

    /// エラーに関連するファイルパス（あれば）
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::InputRead { path, .. } | Self::OutputWrite { path, .. } => Some(path),
            Self::NoInputFiles | Self::StatsRender { .. } => None,
        }
    }
}

/// 分類処理の結果型
pub type FilterResult<T> = std::result::Result<T, FilterError>;
