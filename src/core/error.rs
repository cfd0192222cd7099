// 1ファイル分のリサイズ処理で発生するエラー型定義

use thiserror::Error;

/// リサイズ処理固有のエラー型
///
/// ループ側はこのエラーを標準出力には出さず、ログにだけ残す。
#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("failed to read source file: {source}")]
    Read {
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to decode image: {source}")]
    Decode {
        #[source]
        source: image::ImageError,
    },

    #[error("image has zero height (width {width}), aspect ratio is undefined")]
    ZeroHeight { width: u32 },

    #[error("canvas of {width}x{height} exceeds the supported size")]
    CanvasTooLarge { width: u64, height: u64 },

    #[error("failed to encode canvas as PNG: {source}")]
    Encode {
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write resized image: {source}")]
    Write {
        #[source]
        source: anyhow::Error,
    },
}

impl ResizeError {
    /// 読み込みエラーの作成
    pub fn read(source: anyhow::Error) -> Self {
        Self::Read { source }
    }

    /// 書き込みエラーの作成
    pub fn write(source: anyhow::Error) -> Self {
        Self::Write { source }
    }
}

/// リサイズ処理の結果型
pub type ResizeResult<T> = std::result::Result<T, ResizeError>;
