//! Print a color in every supported representation, or a single one.
//!
//! ```text
//! swatch-convert chocolate
//! swatch-convert --to hsl "rgba(255, 0, 0, 0.5)"
//! swatch-convert --json '{"h": 120, "s": 100, "l": 25}'
//! ```

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use swatch::{Color, Input};

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum Representation {
    Integer,
    Hex,
    Rgb,
    Hsl,
    Vector,
    RgbaRecord,
    HslRecord,
}

const ALL: [Representation; 7] = [
    Representation::Integer,
    Representation::Hex,
    Representation::Rgb,
    Representation::Hsl,
    Representation::Vector,
    Representation::RgbaRecord,
    Representation::HslRecord,
];

#[derive(Parser, Debug)]
#[command(
    name = "swatch-convert",
    about = "Convert a color between hex, CSS, integer, vector and record representations"
)]
struct Args {
    /// The color to convert: a hex color, rgb()/hsl() function or color name
    color: String,

    /// Parse COLOR as JSON, to pass integers, vectors or records
    #[arg(long)]
    json: bool,

    /// Print only this representation
    #[arg(long, value_enum)]
    to: Option<Representation>,
}

fn render(color: &Color, representation: Representation) -> String {
    match representation {
        Representation::Integer => format!("{:#08x}", color.as_integer()),
        Representation::Hex => color.as_hex(),
        Representation::Rgb => color.as_css_rgb_string(),
        Representation::Hsl => color.as_css_hsl_string(),
        Representation::Vector => format!("{:?}", color.as_float_vector()),
        Representation::RgbaRecord => serde_json::to_string(&color.as_rgba_record())
            .unwrap_or_else(|err| format!("<{}>", err)),
        Representation::HslRecord => serde_json::to_string(&color.as_hsl_record())
            .unwrap_or_else(|err| format!("<{}>", err)),
    }
}

fn parse(args: &Args) -> Result<Color, String> {
    let input = if args.json {
        let json: serde_json::Value =
            serde_json::from_str(&args.color).map_err(|err| format!("invalid JSON: {}", err))?;
        Input::try_from(&json).map_err(|err| err.to_string())?
    } else {
        Input::from(args.color.as_str())
    };

    log::debug!("parsing {} input", input.shape());
    Color::new(input).map_err(|err| err.to_string())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let color = match parse(&args) {
        Ok(color) => color,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match args.to {
        Some(representation) => println!("{}", render(&color, representation)),
        None => {
            for representation in ALL {
                let name = representation
                    .to_possible_value()
                    .map(|value| value.get_name().to_string())
                    .unwrap_or_default();
                println!("{:<12} {}", name, render(&color, representation));
            }
        }
    }

    ExitCode::SUCCESS
}
