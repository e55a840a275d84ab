use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for hoslog
/// Hours-of-Service log sheets, cycle usage and travel estimates
#[derive(Parser)]
#[command(
    name = "hoslog",
    version = env!("CARGO_PKG_VERSION"),
    about = "HOS duty timelines: draw log sheets, sum cycle usage and estimate travel time",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LegArg {
    Pickup,
    Dropoff,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// List the daily logs in a log file
    List {
        /// JSON file with the daily logs
        file: String,
    },

    /// Print the SVG path `d` attribute of each daily log
    Path {
        /// JSON file with the daily logs
        file: String,

        #[arg(long, help = "Only the log with this id")]
        id: Option<String>,

        #[arg(long, help = "Width covering 24 hours (default: viewbox_width - label_width)")]
        width: Option<f64>,

        #[arg(long = "row-height", help = "Vertical spacing between status lanes")]
        row_height: Option<f64>,
    },

    /// Render the full SVG log sheet of one daily log
    Sheet {
        /// JSON file with the daily logs
        file: String,

        #[arg(long, help = "Id of the log to render")]
        id: String,

        #[arg(long, value_name = "FILE", help = "Write the SVG to FILE instead of stdout")]
        out: Option<String>,
    },

    /// Sum logged duty span across all logs and show cycle usage
    Cycle {
        /// JSON file with the daily logs
        file: String,
    },

    /// Estimate distance and travel time between two points
    Travel {
        #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
        from: String,

        #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
        to: String,

        #[arg(long, value_name = "KMH", help = "Average speed in km/h")]
        speed: Option<f64>,

        #[arg(long, value_enum, default_value = "dropoff")]
        leg: LegArg,
    },
}

impl From<LegArg> for crate::core::calculator::travel::TripLeg {
    fn from(leg: LegArg) -> Self {
        match leg {
            LegArg::Pickup => Self::Pickup,
            LegArg::Dropoff => Self::Dropoff,
        }
    }
}
