mod chart;
mod color;
mod data;
mod mode;
mod output;

use clap::{Args, Parser, Subcommand};

use chart::{CONSUMPTION_SIZE, EMISSIONS_SIZE, ExportConfig, ExportFormat, PRICE_SIZE};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "fuelviz",
    version,
    about = "Vehicle fuel economy and fuel price charts from GFEI and World Bank data",
    after_help = "Examples:
  fuelviz emissions co2.csv                                   Sorted emissions table
  fuelviz emissions co2.csv --image co2.png                   Gradient-colored bar chart
  fuelviz consumption fuel.csv --feature Japan --image f.png  Consumption over time
  fuelviz price fuel.csv pump.csv --year 2016 --image p.svg --format svg
  fuelviz gradient '#FED976' '#FD8D3C' '#B10000' -n 20         Print a color gradient"
)]
struct Cli {
    /// Suppress explanations (show data only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ImageArgs {
    /// Write the chart to this file
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Image format [default: png]
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,

    /// Image width in pixels
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,
}

#[derive(Subcommand)]
enum Command {
    /// Average CO2 emissions per km, sorted, with gradient bar colors
    Emissions {
        /// GFEI average CO2 emissions CSV
        file: String,

        /// Country drawn in a fixed dark red instead of a gradient color
        #[arg(long, default_value = "Canada", value_name = "COUNTRY")]
        highlight: String,

        /// Upper end of the color gradient (g/km)
        #[arg(long, default_value_t = 200, value_name = "VALUE")]
        ceiling: u32,

        #[command(flatten)]
        image: ImageArgs,
    },

    /// Average fuel consumption over time, one line per country
    Consumption {
        /// GFEI average fuel consumption CSV
        file: String,

        /// Country drawn in red on top of all others
        #[arg(long, default_value = "Canada", value_name = "COUNTRY")]
        highlight: String,

        /// Country drawn with grey markers (repeatable)
        #[arg(
            long = "feature",
            value_name = "COUNTRY",
            default_values = ["United States", "China", "Germany"]
        )]
        features: Vec<String>,

        #[command(flatten)]
        image: ImageArgs,
    },

    /// Fuel consumption against gasoline pump price for one year
    Price {
        /// GFEI average fuel consumption CSV
        consumption: String,

        /// World Bank pump price for gasoline CSV
        pump_price: String,

        /// Year present in both files
        #[arg(long, default_value_t = 2016)]
        year: u16,

        /// Country to label, optionally COUNTRY:SIDE (repeatable; first is highlighted)
        #[arg(long = "label", value_name = "COUNTRY[:SIDE]")]
        labels: Vec<String>,

        #[command(flatten)]
        image: ImageArgs,
    },

    /// Print a linear (2 colors) or polylinear (3+ colors) gradient
    Gradient {
        /// Anchor colors as #RRGGBB or R,G,B
        #[arg(required = true, num_args = 2.., value_name = "COLOR")]
        colors: Vec<String>,

        /// Number of colors to request
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
}

/// Validate image options and build the export configuration
fn export_config(
    args: &ImageArgs,
    default_size: (u32, u32),
) -> Result<Option<ExportConfig>, String> {
    let Some(path) = &args.image else {
        if args.format.is_some() || args.width.is_some() || args.height.is_some() {
            return Err("--format, --width and --height can only be used with --image".to_string());
        }
        return Ok(None);
    };

    if args.width == Some(0) || args.height == Some(0) {
        return Err("Image size must be positive".to_string());
    }

    // Validate image output path
    use std::path::Path;
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(format!("Directory does not exist: {}", parent.display()));
    }

    Ok(Some(ExportConfig {
        path: path.clone(),
        width: args.width.unwrap_or(default_size.0),
        height: args.height.unwrap_or(default_size.1),
        format: args.format.unwrap_or(ExportFormat::Png),
    }))
}

fn main() {
    let cli = Cli::parse();

    // Handle --no-color
    if cli.no_color {
        colored::control::set_override(false);
    }

    let export = |args: &ImageArgs, size| {
        export_config(args, size).unwrap_or_else(|e| {
            print_error(&e);
            std::process::exit(1);
        })
    };

    // Dispatch to appropriate mode
    match &cli.command {
        Command::Emissions {
            file,
            highlight,
            ceiling,
            image,
        } => {
            if *ceiling == 0 {
                print_error("Ceiling must be positive");
                std::process::exit(1);
            }
            let config = export(image, EMISSIONS_SIZE);
            mode::run_emissions(file, highlight, *ceiling, cli.quiet, config.as_ref());
        }
        Command::Consumption {
            file,
            highlight,
            features,
            image,
        } => {
            let config = export(image, CONSUMPTION_SIZE);
            mode::run_consumption(file, highlight, features, cli.quiet, config.as_ref());
        }
        Command::Price {
            consumption,
            pump_price,
            year,
            labels,
            image,
        } => {
            let config = export(image, PRICE_SIZE);
            mode::run_price(
                consumption,
                pump_price,
                *year,
                labels,
                cli.quiet,
                config.as_ref(),
            );
        }
        Command::Gradient { colors, count } => mode::run_gradient(colors, *count, cli.quiet),
    }
}
