use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::path::Path;

use crate::core::WriteMode;

pub mod local;

/// 入力の読み込みと出力の書き込みを抽象化するトレイト
#[automock]
#[async_trait]
pub trait FileStore: Send + Sync {
    /// ファイル全体をバイト列として読み込む
    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;

    /// 各行を改行付きで書き込む
    ///
    /// `WriteMode::Append` なら作成または追記、`WriteMode::Overwrite` なら
    /// 作成または切り詰めて上書きする。
    async fn write_lines(&self, path: &Path, lines: &[String], mode: WriteMode) -> Result<()>;
}

// FileStore for Box<dyn FileStore>
#[async_trait]
impl FileStore for Box<dyn FileStore> {
    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        self.as_ref().read(path).await
    }

    async fn write_lines(&self, path: &Path, lines: &[String], mode: WriteMode) -> Result<()> {
        self.as_ref().write_lines(path, lines, mode).await
    }
}
