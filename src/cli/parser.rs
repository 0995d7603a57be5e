use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for stafflogger
/// CLI application to track staff arrivals and teaching sessions with SQLite
#[derive(Parser)]
#[command(
    name = "stafflogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track staff arrivals and teaching sessions; review them per staff member or org-wide",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage staff members
    Staff {
        /// Add a staff member with the given full name
        #[arg(long = "add", value_name = "NAME")]
        add: Option<String>,

        /// Email address (with --add)
        #[arg(long = "email", requires = "add")]
        email: Option<String>,

        /// List all staff members
        #[arg(long = "list")]
        list: bool,
    },

    /// Manage classes
    Class {
        /// Add a class with the given name
        #[arg(long = "add", value_name = "NAME")]
        add: Option<String>,

        /// Class description (with --add)
        #[arg(long = "desc", requires = "add")]
        desc: Option<String>,

        /// List all classes
        #[arg(long = "list")]
        list: bool,
    },

    /// Record (or correct) a staff arrival for a date
    Arrival {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Staff id
        staff: i64,

        /// Arrival time (HH:MM)
        time: String,

        /// Free-text notes
        #[arg(long = "notes")]
        notes: Option<String>,
    },

    /// Record a teaching session for a date
    Teaching {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Staff id
        staff: i64,

        /// Class id
        class: i64,

        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM), strictly after start
        end: String,

        /// Free-text notes
        #[arg(long = "notes")]
        notes: Option<String>,
    },

    /// Show a monthly calendar of one staff member's logs
    Calendar {
        /// Staff id
        staff: i64,

        /// Month to display (YYYY-MM); defaults to the current month
        #[arg(long = "month", value_name = "YYYY-MM")]
        month: Option<String>,

        /// Show the log details for one day of the month (YYYY-MM-DD)
        #[arg(long = "day", value_name = "YYYY-MM-DD")]
        day: Option<String>,
    },

    /// Org-wide report of arrival and teaching logs
    Report {
        /// Inclusive start date (YYYY-MM-DD)
        #[arg(long = "from", value_name = "DATE")]
        from: Option<String>,

        /// Inclusive end date (YYYY-MM-DD)
        #[arg(long = "to", value_name = "DATE")]
        to: Option<String>,

        /// Restrict to one staff member
        #[arg(long = "staff", value_name = "ID")]
        staff: Option<i64>,
    },

    /// Export log data in various formats
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Inclusive start date (YYYY-MM-DD)
        #[arg(long = "from", value_name = "DATE")]
        from: Option<String>,

        /// Inclusive end date (YYYY-MM-DD)
        #[arg(long = "to", value_name = "DATE")]
        to: Option<String>,

        /// Restrict to one staff member
        #[arg(long = "staff", value_name = "ID")]
        staff: Option<i64>,

        /// Export arrival logs
        #[arg(long, conflicts_with = "teaching")]
        arrivals: bool,

        /// Export teaching logs
        #[arg(long, conflicts_with = "arrivals")]
        teaching: bool,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print")]
        print: bool,
    },
}
