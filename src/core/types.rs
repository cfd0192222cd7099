// 処理に関連するデータ型定義

use super::error::ResizeError;

/// 縦横比の比較方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatioMode {
    /// 幅 / 高さ を整数除算で求めてから 0.75 と比較する（既定の挙動）
    #[default]
    Truncating,
    /// 幅 / 高さ を浮動小数点で求めて比較する
    Exact,
}

/// スキップ理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotAFile,
    NotAnImage,
    AlreadyResized,
}

/// 個別ファイルの処理結果
#[derive(Debug)]
pub enum FileOutcome {
    /// 書き込みまで完了した（キャンバスの幅と高さ）
    Resized { width: u32, height: u32 },
    Skipped(SkipReason),
    Failed(ResizeError),
}

/// 処理全体のサマリー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub total_entries: usize,
    pub resized: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    /// 1エントリ分の結果を集計に加える
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.total_entries += 1;
        match outcome {
            FileOutcome::Resized { .. } => self.resized += 1,
            FileOutcome::Skipped(_) => self.skipped += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }
}
