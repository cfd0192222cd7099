// 実行時設定

use super::types::RatioMode;
use std::path::PathBuf;

/// 既定の入力ディレクトリ
pub const DEFAULT_INPUT_DIR: &str = "./images";

/// 既定の出力ディレクトリ
pub const DEFAULT_OUTPUT_DIR: &str = "./resized-images";

/// バッチリサイズの設定
///
/// 値として一度だけ組み立てて `BatchResizer` に渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub ratio_mode: RatioMode,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            ratio_mode: RatioMode::default(),
        }
    }
}

impl ResizeConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ratio_mode: RatioMode::default(),
        }
    }

    /// 縦横比の比較方法を変更
    pub fn with_ratio_mode(mut self, ratio_mode: RatioMode) -> Self {
        self.ratio_mode = ratio_mode;
        self
    }
}
