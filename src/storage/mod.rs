use anyhow::Result;
use mockall::automock;
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub mod local;

/// ディレクトリ直下のエントリを表す構造体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageItem {
    /// エントリ名（ファイル名、UTF-8 とは限らない）
    pub name: OsString,
    /// エントリのフルパス
    pub path: PathBuf,
    /// 通常ファイルかどうか（ディレクトリ等は false）
    pub is_file: bool,
}

impl StorageItem {
    /// ディレクトリとエントリ名から作成
    pub fn new(directory: &Path, name: impl Into<OsString>, is_file: bool) -> Self {
        let name = name.into();
        Self {
            path: directory.join(&name),
            name,
            is_file,
        }
    }

    /// 表示用のエントリ名（不正な UTF-8 は置換文字になる）
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// ストレージバックエンドのトレイト
#[automock]
pub trait StorageBackend {
    /// ディレクトリが存在しなければ作成する（親は作成しない）
    ///
    /// 新しく作成した場合は `true` を返す。
    fn ensure_directory(&self, directory: &Path) -> std::io::Result<bool>;

    /// ディレクトリ直下のエントリを列挙順にリストする
    fn list_items(&self, directory: &Path) -> Result<Vec<StorageItem>>;

    /// アイテムのデータを読み込む
    fn read_item(&self, path: &Path) -> Result<Vec<u8>>;

    /// アイテムのデータを書き込む（既存ファイルは上書き）
    fn write_item(&self, path: &Path, data: &[u8]) -> Result<()>;
}

// StorageBackend for Box<dyn StorageBackend>
impl StorageBackend for Box<dyn StorageBackend> {
    fn ensure_directory(&self, directory: &Path) -> std::io::Result<bool> {
        self.as_ref().ensure_directory(directory)
    }

    fn list_items(&self, directory: &Path) -> Result<Vec<StorageItem>> {
        self.as_ref().list_items(directory)
    }

    fn read_item(&self, path: &Path) -> Result<Vec<u8>> {
        self.as_ref().read_item(path)
    }

    fn write_item(&self, path: &Path, data: &[u8]) -> Result<()> {
        self.as_ref().write_item(path, data)
    }
}
