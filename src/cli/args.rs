use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use roundel::{BorderColor, ResampleFilter};

#[derive(Parser)]
#[command(name = "roundel", version, about = "Rounded borders and circular favicons for web assets")]
pub struct CliArgs {
    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Surround an image with a rounded, solid-colour border
    Border(BorderArgs),
    /// Cut a logo into circular favicons and a favicon.ico
    Favicons(FaviconArgs),
}

#[derive(Args)]
pub struct BorderArgs {
    /// Source image
    #[arg(short, long, default_value = "public/tomo-image.png")]
    pub input: PathBuf,

    /// Output PNG; defaults to overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON preset with border parameters; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Border width in pixels
    #[arg(long)]
    pub border_width: Option<u32>,

    /// Corner radius of the content in pixels
    #[arg(long)]
    pub corner_radius: Option<u32>,

    /// Border colour: #RRGGBB, #RRGGBBAA or r,g,b[,a]
    #[arg(long)]
    pub color: Option<BorderColor>,

    /// Center-crop the content to a square first
    #[arg(long, default_value_t = false)]
    pub square_crop: bool,

    /// Side length of the square content; only used with square cropping
    #[arg(long)]
    pub size: Option<u32>,

    /// Resampling filter (nearest, bilinear, catmull-rom, lanczos3)
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,
}

#[derive(Args)]
pub struct FaviconArgs {
    /// Source logo
    #[arg(short, long, default_value = "public/aj-logo.jpg")]
    pub input: PathBuf,

    /// Project root that output paths are relative to
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// JSON preset describing the icon set
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Resampling filter (nearest, bilinear, catmull-rom, lanczos3)
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,
}
