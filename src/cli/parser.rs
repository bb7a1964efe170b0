use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for koyomi
/// CLI calendar of Japanese lucky days, moon phases and planetary retrogrades
#[derive(Parser)]
#[command(
    name = "koyomi",
    version = env!("CARGO_PKG_VERSION"),
    about = "A lucky-day & celestial-event calendar for the terminal",
    long_about = None
)]
pub struct Cli {
    /// Disable ANSI colors (useful for pipes and tests)
    #[arg(global = true, long = "plain")]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a month grid with lucky days, moon phases and retrogrades
    Month {
        /// Month to show (YYYY-MM, default: current month)
        period: Option<String>,

        #[arg(long = "no-overlays", help = "Hide the retrograde period bars")]
        no_overlays: bool,
    },

    /// Show the full annotation detail for one date
    Day {
        /// Date to inspect (YYYY-MM-DD, default: today)
        date: Option<String>,
    },

    /// Find the next date(s) carrying a lucky-day tag
    Next {
        /// Tag code (e.g. tensha, ichiryu-manbai, tori)
        #[arg(long = "tag")]
        tag: String,

        /// Start of the scan (YYYY-MM-DD, default: today)
        #[arg(long = "from")]
        from: Option<String>,

        /// How many matches to print
        #[arg(long = "count", default_value_t = 1)]
        count: usize,
    },

    /// Print the legend: every tag, rokuyo label, moon phase and planet
    Legend,

    /// Export per-day annotations
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Include rokuyo-only days (default: only annotated days)
        #[arg(long)]
        all: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
