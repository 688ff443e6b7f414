use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use image::GenericImageView;
use log::info;
use std::fs;
use toascii::{convert, create_color, Color, ConvertConfig, Interpolation, RESET};

mod logging;

const DEFAULT_WIDTH: u32 = 197;
const DEFAULT_HEIGHT: u32 = 28;

#[derive(Parser)]
#[command(name = "toascii", about = "Print images as truecolor ANSI text")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Convert a GIF, JPEG or PNG image
    Render {
        #[arg(short, long)]
        input: String,
        #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
        width: u32,
        #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
        height: u32,
        /// nearest, bilinear, catmull-rom or lanczos3
        #[arg(long, default_value = "nearest")]
        scaler: Interpolation,
        /// Append an attribute reset after the image
        #[arg(long)]
        reset: bool,
    },
    /// Show detected format and dimensions
    Inspect {
        #[arg(short, long)]
        input: String,
    },
    /// Print the base color pairs
    Palette,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    match cli.command {
        Cmd::Render {
            input,
            width,
            height,
            scaler,
            reset,
        } => {
            let bytes = fs::read(&input).with_context(|| format!("reading {input}"))?;
            info!("converting {input} ({} bytes) to {width}x{height}", bytes.len());
            let config = ConvertConfig::new(width, height).with_scaler(scaler);
            let text = convert(&bytes, &config)?;
            print!("{text}");
            if reset {
                print!("{}", *RESET);
            }
        }
        Cmd::Inspect { input } => {
            let bytes = fs::read(&input).with_context(|| format!("reading {input}"))?;
            let format = image::guess_format(&bytes)
                .with_context(|| format!("{input}: unrecognized image format"))?;
            let img = image::load_from_memory_with_format(&bytes, format)?;
            println!("{input}: {format:?}");
            let (width, height) = img.dimensions();
            println!("  Dimensions: {width}x{height}");
            println!("  Color type: {:?}", img.color());
        }
        Cmd::Palette => {
            for bright in [false, true] {
                for fg in Color::BASE {
                    let bg = if fg == Color::Black {
                        Color::White
                    } else {
                        Color::Black
                    };
                    print!("{} {fg:?} ", create_color(fg, bg, bright, false));
                }
                println!("{}", *RESET);
            }
        }
    }
    Ok(())
}
