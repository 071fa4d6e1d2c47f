use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shelf", version)]
#[command(about = "Browse and edit the reading clients' in-memory stores", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed for sample data; the same seed gives the same records and ids
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of sample tags and sources to start with
    #[arg(long, global = true, value_name = "N")]
    pub count: Option<usize>,

    /// Start the flashcard stores empty
    #[arg(long, global = true)]
    pub empty: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Report every store notification on stderr
    #[arg(long, global = true)]
    pub watch: bool,

    /// Config file (defaults to shelf.toml in the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Labels of the consume client
    #[command(alias = "l")]
    Labels {
        #[command(subcommand)]
        action: Option<LabelCommands>,
    },

    /// Tags of the flashcard client
    #[command(alias = "t")]
    Tags {
        #[command(subcommand)]
        action: Option<TagCommands>,
    },

    /// Reading sources of the flashcard client
    #[command(alias = "s")]
    Sources {
        #[command(subcommand)]
        action: Option<SourceCommands>,
    },
}

#[derive(Subcommand, Debug)]
pub enum LabelCommands {
    /// List labels
    #[command(alias = "ls")]
    List,

    /// Add a label
    Add { name: String },

    /// Remove a label by name
    #[command(alias = "rm")]
    Remove { name: String },
}

#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// List tags
    #[command(alias = "ls")]
    List,

    /// Add a tag
    Add { name: String },

    /// Show one tag
    Show { id: String },

    /// Change a tag's name or color
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        color: Option<String>,
    },

    /// Remove a tag by id
    #[command(alias = "rm")]
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
pub enum SourceCommands {
    /// List sources
    #[command(alias = "ls")]
    List,

    /// Add a source
    Add { name: String },

    /// Show one source (the /source/[id] page)
    Show { id: String },

    /// Change a source's fields
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// Fragments extracted so far
        #[arg(long, value_name = "N")]
        fragments: Option<u32>,

        /// Total pages
        #[arg(long, value_name = "N")]
        pages: Option<u32>,

        /// Replace the source's tags (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Remove a source by id
    #[command(alias = "rm")]
    Remove { id: String },
}
