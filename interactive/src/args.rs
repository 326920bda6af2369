use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Width of the window in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,
    /// Height of the window in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,
}
