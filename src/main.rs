use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pixelvis::{HueDistance, Options, Palette, DEFAULT_WIDTH};

#[derive(Parser)]
#[command(name = "pixelvis")]
#[command(about = "Shrink an image and repaint it with a fixed pixel-art palette")]
struct Cli {
    /// Image file to convert
    #[arg(required_unless_present = "list_palettes")]
    input: Option<PathBuf>,

    /// Where to write the result; the extension picks the format
    #[arg(required_unless_present = "list_palettes")]
    output: Option<PathBuf>,

    /// Width of the output in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Palette to use: pico-8, neon or gameboy
    #[arg(long, default_value = "neon")]
    palette: String,

    /// Compare hues around the color wheel instead of as plain numbers
    #[arg(long)]
    circular_hue: bool,

    /// Print the built-in palettes and exit
    #[arg(long)]
    list_palettes: bool,
}

fn list_palettes() {
    for palette in Palette::all() {
        let colors: Vec<String> = palette
            .colors()
            .iter()
            .map(|c| format!("#{:02x}{:02x}{:02x}", c[0], c[1], c[2]))
            .collect();
        println!("{:8} {}", palette.name(), colors.join(" "));
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if cli.list_palettes {
        list_palettes();
        return Ok(());
    }

    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        anyhow::bail!("both <INPUT> and <OUTPUT> are required");
    };

    let options = Options {
        width: cli.width,
        palette: cli.palette.parse()?,
        hue: if cli.circular_hue {
            HueDistance::Circular
        } else {
            HueDistance::Linear
        },
    };

    pixelvis::run(&input, &output, &options)
        .with_context(|| format!("failed to convert {}", input.display()))?;
    Ok(())
}
