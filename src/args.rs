use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(
    about = "In-memory student registry with filtering, selection, pagination, and export",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,
}

/// The complete field set of a record. Create and update both take all of
/// it; there are no partial updates.
#[derive(Args, Debug, Clone)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Ten digit phone number
    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub password: String,

    #[arg(long)]
    pub confirm_password: String,

    #[arg(long)]
    pub language: String,

    /// Male, Female or Others
    #[arg(long)]
    pub gender: String,

    /// Date of birth, YYYY-MM-DD
    #[arg(long)]
    pub dob: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List students, filtered and paginated
    #[command(alias = "ls")]
    List {
        /// Free-text filter, matched case-insensitively against every field
        term: Option<String>,

        /// Page to show (1-based, clamped into range)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Records per page
        #[arg(long, default_value_t = 5)]
        per_page: usize,
    },

    /// Add a new student
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Replace an existing student's fields (id is preserved)
    Update {
        id: i64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete students by id
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Dashboard aggregates over the whole registry
    Stats,

    /// Export records to a file
    Export {
        #[command(subcommand)]
        format: ExportFormat,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExportFormat {
    /// Delimited text: one header line, one quoted line per record
    Csv {
        #[command(flatten)]
        opts: ExportOpts,
    },

    /// Paginated tabular report with a trailing summary page
    Report {
        #[command(flatten)]
        opts: ExportOpts,

        /// Report title
        #[arg(long, default_value = "Students Report")]
        title: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ExportOpts {
    /// Output file; defaults to a date-stamped name in the working directory
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Export only records matching this filter term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Export only these ids (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<i64>,
}
