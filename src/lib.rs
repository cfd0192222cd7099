pub mod canvas;
pub mod cli;
pub mod core;
pub mod file_scanner;
pub mod image_loader;
pub mod storage;

use crate::core::{FileOutcome, ResizeConfig, ResizeError, ResizeResult, RunSummary};
use canvas::CanvasLayout;
use file_scanner::ProcessedNames;
use image_loader::ImageLoader;
use std::io::{self, Write};
use storage::{StorageBackend, StorageItem};
use tracing::{debug, info, warn};

/// バッチリサイズ処理の本体
///
/// ストレージを直接所有し、設定は値として受け取る。
/// 1ファイルずつ順番に処理し、次のファイルに進む前に全てのバッファを解放する。
pub struct BatchResizer<S>
where
    S: StorageBackend,
{
    storage: S,
    config: ResizeConfig,
}

impl<S> BatchResizer<S>
where
    S: StorageBackend,
{
    /// 新しいインスタンスを作成（コンストラクタインジェクション）
    pub fn new(storage: S, config: ResizeConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// 出力ディレクトリを用意する
    ///
    /// 権限不足の場合はメッセージを出力して処理を続行する。
    pub fn prepare_output_directory<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let directory = &self.config.output_dir;

        match self.storage.ensure_directory(directory) {
            Ok(true) => debug!("Created output directory {}", directory.display()),
            Ok(false) => {}
            Err(error) if error.kind() == io::ErrorKind::PermissionDenied => {
                writeln!(out, "No privilege to create folder: {}", directory.display())?;
            }
            Err(error) => warn!(
                "Failed to create output directory {}: {error}",
                directory.display()
            ),
        }

        Ok(())
    }

    /// 実行前の出力ディレクトリのスナップショットを取得
    pub fn load_processed_names(&self) -> ProcessedNames {
        let processed = ProcessedNames::load(&self.storage, &self.config.output_dir);
        debug!("{} names already present in output directory", processed.len());
        processed
    }

    /// 1エントリを処理する（エラーは結果として返し、伝播させない）
    pub fn process_entry(&self, item: &StorageItem, processed: &ProcessedNames) -> FileOutcome {
        if let Some(reason) = file_scanner::skip_reason(item, processed) {
            return FileOutcome::Skipped(reason);
        }

        match self.resize_item(item) {
            Ok(layout) => FileOutcome::Resized {
                width: layout.width,
                height: layout.height,
            },
            Err(error) => FileOutcome::Failed(error),
        }
    }

    fn resize_item(&self, item: &StorageItem) -> ResizeResult<CanvasLayout> {
        let data = self
            .storage
            .read_item(&item.path)
            .map_err(ResizeError::read)?;
        let source = ImageLoader::decode(&data)?;

        let layout = canvas::layout_for(source.width(), source.height(), self.config.ratio_mode)?;
        let png = ImageLoader::encode_png(canvas::center_on_canvas(&source, &layout))?;

        // 拡張子は書き換えず、元のファイル名（バイト列そのまま）で PNG を書き込む
        let target = self.config.output_dir.join(&item.name);
        self.storage
            .write_item(&target, &png)
            .map_err(ResizeError::write)?;

        Ok(layout)
    }

    /// アプリケーションの主要なロジック（逐次処理）
    ///
    /// `out` に書き込むのは開始・完了メッセージと、書き込みに成功したファイルの行のみ。
    /// スキップや失敗はログにだけ残す。
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<RunSummary> {
        self.prepare_output_directory(out)?;
        let processed = self.load_processed_names();

        writeln!(out, "Resizing images...")?;

        let items = match self.storage.list_items(&self.config.input_dir) {
            Ok(items) => items,
            Err(error) => {
                warn!("Cannot list input directory: {error:#}");
                Vec::new()
            }
        };

        let mut summary = RunSummary::default();
        for item in &items {
            let outcome = self.process_entry(item, &processed);
            let name = item.display_name();

            match &outcome {
                FileOutcome::Resized { width, height } => {
                    debug!("Wrote {name} on a {width}x{height} canvas");
                    writeln!(out, "{name} resized.")?;
                }
                FileOutcome::Skipped(reason) => debug!("Skipped {name}: {reason:?}"),
                FileOutcome::Failed(error) => warn!("Failed to resize {name}: {error}"),
            }

            summary.record(&outcome);
        }

        writeln!(out, "Done.")?;
        info!(
            resized = summary.resized,
            skipped = summary.skipped,
            failed = summary.failed,
            "Batch finished"
        );

        Ok(summary)
    }
}
