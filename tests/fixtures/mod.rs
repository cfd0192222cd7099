// テスト用の画像ファイル作成ヘルパー

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// 不透明な PNG を書き込む
pub fn write_png(path: &Path, width: u32, height: u32) {
    let image = RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
    image.save_with_format(path, ImageFormat::Png).unwrap();
}

/// グレースケールの PNG を書き込む（ファイルは小さいが展開後は大きい）
pub fn write_gray_png(path: &Path, width: u32, height: u32) {
    GrayImage::new(width, height)
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

/// JPEG を書き込む（アルファなし）
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    DynamicImage::ImageRgb8(RgbImage::new(width, height))
        .save_with_format(path, ImageFormat::Jpeg)
        .unwrap();
}

/// 中身から形式を判定して読み込む（拡張子は見ない）
pub fn read_output(path: &Path) -> (ImageFormat, DynamicImage) {
    let data = fs::read(path).unwrap();
    let format = image::guess_format(&data).unwrap();
    (format, image::load_from_memory(&data).unwrap())
}

/// `images/` を持つ作業ディレクトリを作成
pub fn workspace() -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let images = temp_dir.path().join("images");
    fs::create_dir(&images).unwrap();
    (temp_dir, images)
}

/// 作業ディレクトリでバイナリを引数なしで実行（stdin は端末ではない）
pub fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_batch_resizer"))
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute binary")
}

/// "resized." 行をソートして返す（列挙順はファイルシステム依存）
pub fn resized_lines(stdout: &str) -> Vec<String> {
    let mut lines: Vec<String> = stdout
        .lines()
        .filter(|line| line.ends_with(" resized."))
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}
