use super::{StorageBackend, StorageItem};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// ローカルファイルシステム用のストレージバックエンド
#[derive(Clone, Debug)]
pub struct LocalStorageBackend;

impl Default for LocalStorageBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for LocalStorageBackend {
    fn ensure_directory(&self, directory: &Path) -> std::io::Result<bool> {
        if directory.exists() {
            return Ok(false);
        }

        std::fs::create_dir(directory)?;
        Ok(true)
    }

    fn list_items(&self, directory: &Path) -> Result<Vec<StorageItem>> {
        let mut items = Vec::new();

        // 直下のエントリのみ（再帰しない）
        for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                // ディレクトリ自体が読めない場合は一覧全体を失敗させる
                Err(error) if error.depth() == 0 => {
                    return Err(error).with_context(|| {
                        format!("Failed to read directory: {}", directory.display())
                    });
                }
                Err(error) => {
                    warn!("Skipping unreadable entry in {}: {error}", directory.display());
                    continue;
                }
            };

            let name = entry.file_name().to_os_string();
            // シンボリックリンクはリンク先で判定する
            let is_file = std::fs::metadata(entry.path())
                .map(|metadata| metadata.is_file())
                .unwrap_or(false);

            items.push(StorageItem {
                name,
                path: entry.path().to_path_buf(),
                is_file,
            });
        }

        Ok(items)
    }

    fn read_item(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn write_item(&self, path: &Path, data: &[u8]) -> Result<()> {
        std::fs::write(path, data)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}
