use super::FileStore;
use crate::core::WriteMode;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWriteExt, BufWriter};

/// ローカルファイルシステム用のストア
#[derive(Debug, Clone)]
pub struct LocalFileStore;

impl Default for LocalFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }

    fn open_options(mode: WriteMode) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Append => options.append(true),
            WriteMode::Overwrite => options.write(true).truncate(true),
        };
        options
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn write_lines(&self, path: &Path, lines: &[String], mode: WriteMode) -> Result<()> {
        let file = Self::open_options(mode)
            .open(path)
            .await
            .with_context(|| format!("Failed to open output file: {}", path.display()))?;

        let mut writer = BufWriter::new(file);
        for line in lines {
            writer.write_all(line.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        writer
            .flush()
            .await
            .with_context(|| format!("Failed to flush output file: {}", path.display()))?;

        Ok(())
    }
}
