use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for carpark.
/// CLI tool managing a single parking lot over two flat-file tables.
#[derive(Parser)]
#[command(
    name = "carpark",
    version = env!("CARGO_PKG_VERSION"),
    about = "A single-lot parking record manager: spot occupancy, sessions, and time-based fees",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory holding both tables (useful for tests)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty spot table
    Init,

    /// Display the parking status grid and occupied count
    Status,

    /// Check a vehicle in to a specific spot
    Checkin {
        /// Owner name
        #[arg(long)]
        name: String,

        /// License plate (no whitespace)
        #[arg(long)]
        plate: String,

        /// Phone number (exactly 10 digits)
        #[arg(long)]
        phone: String,

        /// Owner address
        #[arg(long)]
        address: String,

        /// Spot number to park in
        #[arg(long)]
        spot: u32,
    },

    /// Check a vehicle out and print the fee receipt
    Checkout {
        /// License plate of the parked vehicle
        #[arg(long)]
        plate: String,
    },

    /// Search the parking history
    Search {
        /// Search by owner name
        #[arg(long, conflicts_with = "plate")]
        owner: Option<String>,

        /// Search by license plate
        #[arg(long)]
        plate: Option<String>,
    },

    /// Check spot table and ledger for inconsistencies
    Check,

    /// Export the full history ledger
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite an existing file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of both tables
    Backup {
        /// Destination file (.zip with --compress, directory prefix otherwise)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Run the interactive character menu
    Menu,
}
