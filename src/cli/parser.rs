use crate::export::ExportFormat;
use crate::models::taxonomy::Level;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rdaylog
#[derive(Parser)]
#[command(
    name = "rdaylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log what you did and where, see the gaps in your day, get next-activity suggestions",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a separate journal)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Mirror log output to stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Optional taxonomy path given as four flags.
#[derive(Args, Debug, Clone, Default)]
pub struct ClassArgs {
    #[arg(long, help = "Demand (top-level need, e.g. Personal)")]
    pub demand: Option<String>,

    #[arg(long, help = "Project under the demand (e.g. Nutrition)")]
    pub project: Option<String>,

    #[arg(long, help = "Activity under the project (e.g. Eating)")]
    pub activity: Option<String>,

    #[arg(long, help = "Behavior under the activity (e.g. Sitting)")]
    pub behavior: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the data directory
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Log an activity
    Add {
        /// Episode name, e.g. "afternoon nap"
        episode: String,

        #[arg(long, help = "Date of the start time (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(
            long = "start",
            help = "Start time (HH:MM, default: continue from the last activity)"
        )]
        start: Option<String>,

        #[arg(
            long = "end",
            help = "End time (HH:MM, default: now; required for past dates). Earlier than start means next day"
        )]
        end: Option<String>,

        #[command(flatten)]
        class: ClassArgs,

        #[arg(long = "loc", help = "Location name")]
        location: Option<String>,

        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,

        #[arg(long = "desc", help = "Free-text note")]
        description: Option<String>,

        #[arg(
            long = "save-template",
            help = "Store this episode's classification/location as its template"
        )]
        save_template: bool,
    },

    /// Delete an activity by id
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List activities
    List {
        #[arg(long, short, help = "YYYY, YYYY-MM, YYYY-MM-DD or a range A:B")]
        period: Option<String>,

        #[arg(long = "today", help = "Only today's activities")]
        today: bool,

        #[arg(long, short, help = "Text contained in the episode or description")]
        search: Option<String>,

        #[command(flatten)]
        class: ClassArgs,

        #[arg(long = "loc")]
        location: Option<String>,

        #[arg(long, help = "Show id, classification and note for each activity")]
        details: bool,
    },

    /// Show the 24-hour coverage of a day (activities and gaps)
    Day {
        /// YYYY-MM-DD (default: today)
        date: Option<String>,
    },

    /// Show the last activity and where the next one would start
    Last,

    /// Suggest what to log next
    Recommend {
        #[arg(long, help = "Reference time \"YYYY-MM-DD HH:MM\" (default: now)")]
        at: Option<String>,

        #[arg(long, help = "Hide a suggestion by name (repeatable)")]
        dismiss: Vec<String>,
    },

    /// Manage episode templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Manage the demand/project/activity/behavior tree
    Taxonomy {
        #[command(subcommand)]
        action: TaxonomyAction,
    },

    /// Export activities
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

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Archive the data documents into a zip file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Deflate the archive entries")]
        compress: bool,
    },

    /// Remove every logged activity (templates and taxonomy are kept)
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum TemplateAction {
    /// List all templates
    List,

    /// Show one template
    Show { name: String },

    /// Create or replace a template
    Set {
        name: String,

        #[command(flatten)]
        class: ClassArgs,

        #[arg(long = "loc")]
        location: Option<String>,
    },

    /// Delete a template
    Del { name: String },
}

#[derive(Subcommand)]
pub enum TaxonomyAction {
    /// Print the whole tree
    Tree,

    /// Add a node
    Add {
        #[arg(value_enum)]
        level: Level,

        name: String,

        #[arg(long, default_value = "", help = "Parent path, e.g. Personal/Sleep")]
        path: String,
    },

    /// Remove a node
    Rm {
        #[arg(value_enum)]
        level: Level,

        name: String,

        #[arg(long, default_value = "")]
        path: String,
    },

    /// Find the classification path of an episode
    Resolve { episode: String },
}
