use crate::export::{ExportFormat, ExportTarget};
use clap::{Parser, Subcommand};

/// Command-line interface definition for marinerlog
/// Personal logbook for seafarers: rotations, sea time, documents and notes
#[derive(Parser)]
#[command(
    name = "marinerlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A seafarer's logbook: track rotations, sea time, certificates, leave and notes using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(global = true, long = "today", hide = true, value_name = "DATE")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export one collection to CSV or JSON
    Export {
        #[arg(long, value_enum)]
        collection: ExportTarget,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Keep records overlapping a year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a local account and log in
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Start a session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Close the current session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Check whether a password reset can be started for an account
    ResetPassword {
        #[arg(long)]
        email: String,
    },

    /// Manage rotations (embarkations)
    Rotation {
        #[command(subcommand)]
        action: RotationAction,
    },

    /// Manage historical sea time
    #[command(name = "seatime")]
    SeaTime {
        #[command(subcommand)]
        action: SeaTimeAction,
    },

    /// Manage planned leave and courses
    Leave {
        #[command(subcommand)]
        action: LeaveAction,
    },

    /// Manage training documents and certificates
    Doc {
        #[command(subcommand)]
        action: DocAction,
    },

    /// Manage diary notes
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Show the logbook summary
    Dashboard,

    /// Show the month agenda
    Calendar {
        #[arg(long, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum RotationAction {
    /// Add a rotation, or a year of rotations with --repeat
    Add {
        #[arg(long)]
        vessel: String,

        #[arg(long, default_value = "")]
        company: String,

        #[arg(long, default_value = "")]
        position: String,

        #[arg(long, default_value = "")]
        location: String,

        /// Embark date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Disembark date (YYYY-MM-DD); defaults to start + days on
        #[arg(long)]
        end: Option<String>,

        /// On/off regime, e.g. 14x14, 28x28 or 35x20
        #[arg(long)]
        regime: Option<String>,

        #[arg(long, default_value = "")]
        notes: String,

        #[arg(long, help = "Generate the following periods of the regime (up to one year)")]
        repeat: bool,
    },

    /// Change fields of a rotation
    Edit {
        /// Rotation id (or unique prefix)
        id: String,

        #[arg(long)]
        vessel: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        regime: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List upcoming and ongoing rotations
    List {
        #[arg(long, help = "Include completed rotations")]
        all: bool,
    },

    /// Delete a rotation
    Del {
        /// Rotation id (or unique prefix)
        id: String,
    },

    /// Delete every rotation
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum SeaTimeAction {
    /// Record sea time served before using the logbook
    Add {
        /// Vessel name; a blank value is stored as a generic reference
        #[arg(long)]
        vessel: Option<String>,

        #[arg(long)]
        start: String,

        #[arg(long)]
        end: String,
    },

    /// List historical sea time and its total
    List,

    /// Delete a historical entry
    Del {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum LeaveAction {
    /// Plan a leave or course
    Add {
        #[arg(long)]
        title: String,

        /// course, vacation, day-off, time-bank or other
        #[arg(long = "type", default_value = "vacation")]
        kind: String,

        #[arg(long)]
        start: String,

        #[arg(long)]
        end: String,

        /// planned, approved or completed
        #[arg(long, default_value = "planned")]
        status: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Change fields of a leave
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List planned leave and courses
    List,

    /// Delete a leave
    Del {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum DocAction {
    /// Register a document, optionally attaching a file (max 1.5 MiB)
    Add {
        #[arg(long)]
        name: String,

        /// course, certificate or document
        #[arg(long = "type", default_value = "certificate")]
        kind: String,

        #[arg(long, default_value = "")]
        institution: String,

        /// Issue date (YYYY-MM-DD)
        #[arg(long)]
        issued: String,

        /// Expiry date (YYYY-MM-DD); omit for documents that never expire
        #[arg(long)]
        expires: Option<String>,

        #[arg(long)]
        number: Option<String>,

        #[arg(long, default_value = "")]
        notes: String,

        #[arg(long, value_name = "FILE")]
        attach: Option<String>,
    },

    /// Change fields of a document
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long)]
        institution: Option<String>,

        #[arg(long)]
        issued: Option<String>,

        #[arg(long, conflicts_with = "no_expiry")]
        expires: Option<String>,

        #[arg(long, help = "Mark the document as never expiring")]
        no_expiry: bool,

        #[arg(long)]
        number: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long, value_name = "FILE", conflicts_with = "detach")]
        attach: Option<String>,

        #[arg(long, help = "Remove the attachment")]
        detach: bool,
    },

    /// List documents with their status
    List {
        /// Only show one category (course, certificate, document)
        #[arg(long = "type")]
        kind: Option<String>,
    },

    /// Delete a document
    Del {
        id: String,
    },

    /// Save a document's attachment to disk
    Attachment {
        id: String,

        #[arg(long, value_name = "FILE")]
        out: String,
    },
}

#[derive(Subcommand)]
pub enum NoteAction {
    /// Write a diary note
    Add {
        content: String,

        #[arg(long, default_value = "professional")]
        category: String,

        /// Tag, repeatable (--tag exam --tag stcw)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// List notes, newest first
    List {
        #[arg(long)]
        tag: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Delete a note
    Del {
        id: String,
    },
}
