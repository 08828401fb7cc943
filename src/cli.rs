use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::formatting::ColorMode;

#[derive(Parser, Debug)]
#[command(name = "bikeshare")]
#[command(about = "Interactive explorer for US bikeshare trip data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing the city CSV files (chicago.csv,
    /// new_york_city.csv, washington.csv)
    #[arg(long = "data-dir", default_value = ".", env = "BIKESHARE_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Plain output: no colors
    #[arg(long)]
    pub plain: bool,

    /// When to use colored output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorChoice {
    /// Detect based on terminal
    Auto,
    /// Force colors on
    Always,
    /// Force colors off
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}
