use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for daydial
#[derive(Parser)]
#[command(
    name = "daydial",
    version = env!("CARGO_PKG_VERSION"),
    about = "A day planner that lays out your appointments on a 24-hour dial",
    long_about = None
)]
pub struct Cli {
    /// Override the event catalog path (useful for tests or custom catalogs)
    #[arg(global = true, long = "catalog")]
    pub catalog: Option<String>,

    /// Run in test mode (no config file update, no file logging)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty event catalog
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a new event
    Add {
        /// Date of the event, or of its first occurrence (YYYY-MM-DD)
        date: String,

        #[arg(long = "title", help = "Event title")]
        title: String,

        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: String,

        #[arg(
            long = "end",
            help = "End time (HH:MM); an end at or before the start crosses midnight"
        )]
        end: String,

        #[arg(
            long = "recurrence",
            short = 'r',
            help = "Repetition: none, daily, weekly, monthly"
        )]
        recurrence: Option<String>,

        #[arg(long = "color", help = "Arc color (any SVG color)")]
        color: Option<String>,

        #[arg(long = "category", help = "Free-form category")]
        category: Option<String>,

        #[arg(long = "description", help = "Free-form notes")]
        description: Option<String>,
    },

    /// Replace fields of an existing event (the whole record is rewritten)
    Edit {
        /// Event id
        id: String,

        #[arg(long = "date", help = "New anchor date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "title")]
        title: Option<String>,

        #[arg(long = "start", help = "New start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "New end time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "recurrence", short = 'r')]
        recurrence: Option<String>,

        #[arg(long = "color")]
        color: Option<String>,

        #[arg(long = "category")]
        category: Option<String>,

        #[arg(long = "description")]
        description: Option<String>,
    },

    /// Mark an event as completed (or not, with --undo)
    Done {
        /// Event id
        id: String,

        #[arg(long = "undo", help = "Mark the event as not completed")]
        undo: bool,
    },

    /// Delete an event by id
    Del {
        /// Event id
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List the events of a day, with recurrences and overnight spill-over
    List {
        /// Day to show (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long = "today", help = "Show today's events")]
        now: bool,
    },

    /// Show the dial layout of a day: arcs per ring, tracks and free time
    Dial {
        /// Day to show (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long = "focus", help = "Highlight the event with this id")]
        focus: Option<String>,

        #[arg(long = "no-sleep", help = "Hide the sleep window")]
        no_sleep: bool,
    },

    /// Export the dial of a day as SVG or JSON
    Export {
        /// Day to export (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long, value_enum, default_value = "svg")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "focus", help = "Highlight the event with this id")]
        focus: Option<String>,

        #[arg(long = "no-sleep", help = "Hide the sleep window")]
        no_sleep: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replay a pointer gesture on the dial and report the selected time
    Pointer {
        /// Day the gesture applies to (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long = "down", value_name = "X,Y", help = "Pointer-down position")]
        down: String,

        #[arg(long = "move", value_name = "X,Y", help = "Intermediate positions")]
        moves: Vec<String>,

        #[arg(
            long = "up",
            value_name = "X,Y",
            help = "Pointer-up position (omit to simulate leaving the dial)"
        )]
        up: Option<String>,

        #[arg(long = "locked", help = "Dial is locked: gestures are ignored")]
        locked: bool,

        #[arg(long = "add", value_name = "TITLE", help = "Create an event from the selection")]
        add: Option<String>,
    },

    /// Remove old non-recurring events
    Cleanup {
        #[arg(
            long = "months",
            help = "Remove non-recurring events older than this many months (0 = remove everything)"
        )]
        months: u32,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
