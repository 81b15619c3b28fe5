//! Generate command implementation.
//!
//! Wires seed -> colour -> style -> PNG file.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::config::Config;
use crate::error::{AvatarError, Result};
use crate::output::{display_path, Printer};
use crate::render::text::has_visible_text;
use crate::render::{save_avatar, FontRasterizer, RenderEngine};
use crate::types::{pick_entry, Colour, Style};

/// Generate an avatar PNG
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Seed that selects the background colour (e.g. a user name)
    #[arg(long)]
    pub seed: Option<String>,

    /// Text drawn in the centre of the avatar
    #[arg(long, short, conflicts_with = "initials")]
    pub text: Option<String>,

    /// Use the seed's initials as the text ("John Doe" -> "JD")
    #[arg(long)]
    pub initials: bool,

    /// Background style
    #[arg(long, short, value_enum)]
    pub style: Option<Style>,

    /// Edge length in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub size: Option<i32>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Font file for the text overlay
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Background colour override (#RRGGBB), bypassing the seed
    #[arg(long)]
    pub colour: Option<Colour>,

    /// Config file (default: ./avatar.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a JSON record instead of the file path
    #[arg(long)]
    pub json: bool,
}

/// What was generated, as printed by `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarRecord {
    pub path: PathBuf,
    pub seed: Option<String>,
    pub text: Option<String>,
    pub style: Style,
    pub size: i32,
    pub colour: Colour,
    /// Palette entry name, absent when the colour was overridden.
    pub palette: Option<&'static str>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(Path::new("."))?,
    };

    let json = args.json;
    let record = generate(args, &config)?;

    printer.success(
        "Generated",
        &format!(
            "{} avatar ({}x{}, {}) at {}",
            record.style,
            record.size,
            record.size,
            record.colour,
            printer.cyan(&display_path(&record.path))
        ),
    );

    if json {
        let line = serde_json::to_string(&record).map_err(|e| AvatarError::Encode {
            message: format!("Failed to serialize record: {}", e),
        })?;
        println!("{}", line);
    } else {
        println!("{}", record.path.display());
    }

    Ok(())
}

/// Render and save one avatar using `args` layered over `config`.
pub fn generate(args: GenerateArgs, config: &Config) -> Result<AvatarRecord> {
    let style = args.style.unwrap_or(config.style);
    let size = args.size.unwrap_or(config.size);
    let output = args.output.clone().unwrap_or_else(|| config.output.clone());

    if size <= 0 {
        return Err(AvatarError::InvalidDimension { value: size });
    }

    let text = if args.initials {
        args.seed.as_deref().map(initials)
    } else {
        args.text.clone()
    };
    let text = text.filter(|t| has_visible_text(Some(t.as_str())));

    let (colour, palette) = match args.colour {
        Some(colour) => (colour, None),
        None => {
            let entry = pick_entry(args.seed.as_deref());
            (entry.colour(), Some(entry.name()))
        }
    };

    let font = match &text {
        Some(_) => Some(FontRasterizer::discover(
            args.font.as_deref().or(config.font.as_deref()),
        )?),
        None => None,
    };
    if let Some(path) = font.as_ref().and_then(FontRasterizer::source) {
        log::debug!("text font: {}", path.display());
    }
    let engine = match &font {
        Some(font) => RenderEngine::new(font),
        None => RenderEngine::without_text(),
    };

    let mut rng = rand::thread_rng();
    let canvas = engine.render(style, colour, text.as_deref(), size, &mut rng)?;
    let path = save_avatar(&canvas, style, &output, &mut rng)?;

    Ok(AvatarRecord {
        path,
        seed: args.seed,
        text,
        style,
        size,
        colour,
        palette,
    })
}

/// Upper-cased first letters of the first two words of `name`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
