use crate::core::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use crate::core::{RatioMode, ResizeConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "batch_resizer")]
#[command(about = "Pad every image in a directory onto a transparent 3:4 canvas")]
#[command(version)]
pub struct Cli {
    /// Directory whose images are resized (not scanned recursively)
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// Directory the PNG results are written to; existing names are skipped
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Compare the true width/height ratio instead of its integer quotient
    #[arg(long)]
    pub exact_ratio: bool,

    /// Exit without waiting for ENTER, even on an interactive terminal
    #[arg(long)]
    pub no_pause: bool,
}

impl Cli {
    pub fn resize_config(&self) -> ResizeConfig {
        let ratio_mode = if self.exact_ratio {
            RatioMode::Exact
        } else {
            RatioMode::Truncating
        };

        ResizeConfig::new(self.input.clone(), self.output.clone()).with_ratio_mode(ratio_mode)
    }
}
