use clap::Parser;

use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Width of the output image
    #[arg(long, default_value_t = 729)]
    pub width: usize,
    /// Height of the output image
    #[arg(long, default_value_t = 729)]
    pub height: usize,
    /// Path to save the render to
    #[arg(short, long, default_value_os_t = PathBuf::from("carpet.png"))]
    pub output: PathBuf,
}
