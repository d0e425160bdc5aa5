use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use picfx::{FlipAxis, Pixmap, Rotation, codec};

#[derive(Parser, Debug)]
#[command(name = "picfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Invert every channel of every pixel.
    Invert(UnaryArgs),
    /// Convert to grayscale (truncated per-pixel channel mean).
    Grayscale(UnaryArgs),
    /// Rotate clockwise by 90, 180 or 270 degrees.
    Rotate(RotateArgs),
    /// Mirror across an axis: H (left-right) or V (top-bottom).
    Flip(FlipArgs),
    /// Average several images pixel by pixel, cropped to the smallest
    /// common dimensions.
    Blend(BlendArgs),
    /// Apply an edge-preserving 3x3 box blur.
    Blur(UnaryArgs),
}

#[derive(Parser, Debug)]
struct UnaryArgs {
    /// Input image path.
    in_path: PathBuf,

    /// Output PNG path.
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RotateArgs {
    /// Rotation angle in degrees: 90, 180 or 270.
    angle: u16,

    /// Input image path.
    in_path: PathBuf,

    /// Output PNG path.
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FlipArgs {
    /// Mirror axis: H or V.
    axis: String,

    /// Input image path.
    in_path: PathBuf,

    /// Output PNG path.
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct BlendArgs {
    /// One or more input image paths followed by the output PNG path.
    #[arg(required = true, num_args = 2.., value_name = "IN... OUT")]
    paths: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Invert(args) => cmd_in_place(args, picfx::invert),
        Command::Grayscale(args) => cmd_in_place(args, picfx::grayscale),
        Command::Rotate(args) => cmd_rotate(args),
        Command::Flip(args) => cmd_flip(args),
        Command::Blend(args) => cmd_blend(args),
        Command::Blur(args) => cmd_blur(args),
    }
}

fn cmd_in_place(args: UnaryArgs, transform: fn(&mut Pixmap)) -> anyhow::Result<()> {
    let mut px = codec::load_pixmap(&args.in_path)?;
    transform(&mut px);
    write_out(&px, &args.out)
}

fn cmd_rotate(args: RotateArgs) -> anyhow::Result<()> {
    let rotation = Rotation::from_degrees(args.angle)?;
    let px = codec::load_pixmap(&args.in_path)?;
    write_out(&picfx::rotate(&px, rotation), &args.out)
}

fn cmd_flip(args: FlipArgs) -> anyhow::Result<()> {
    let axis = FlipAxis::from_tag(&args.axis)?;
    let px = codec::load_pixmap(&args.in_path)?;
    write_out(&picfx::flip(&px, axis), &args.out)
}

fn cmd_blend(args: BlendArgs) -> anyhow::Result<()> {
    let Some((out, inputs)) = args.paths.split_last() else {
        anyhow::bail!("blend needs at least one input and an output path");
    };

    let mut sources = Vec::with_capacity(inputs.len());
    for path in inputs {
        sources.push(codec::load_pixmap(path)?);
    }

    write_out(&picfx::blend(&sources)?, out)
}

fn cmd_blur(args: UnaryArgs) -> anyhow::Result<()> {
    let px = codec::load_pixmap(&args.in_path)?;
    write_out(&picfx::box_blur(&px), &args.out)
}

fn write_out(px: &Pixmap, out: &Path) -> anyhow::Result<()> {
    codec::save_pixmap(px, out)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
