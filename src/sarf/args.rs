use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sarf")]
#[command(about = "Root-and-pattern morphological derivation from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage roots
    #[command(subcommand, alias = "r")]
    Root(RootCmd),

    /// Manage schemes
    #[command(subcommand, alias = "s")]
    Scheme(SchemeCmd),

    /// Manage stored derived words
    #[command(subcommand, alias = "w")]
    Word(WordCmd),

    /// Generate a derived word for a root and scheme
    #[command(alias = "g")]
    Gen {
        /// The root, e.g. كتب
        root: String,

        /// Scheme name, e.g. فاعل
        scheme: String,

        /// Store the generated word under the root
        #[arg(long)]
        store: bool,
    },

    /// Generate a root's full derived family (one word per scheme)
    #[command(name = "gen-all")]
    GenAll {
        /// The root, e.g. كتب
        root: String,

        /// Store every generated word under the root
        #[arg(long)]
        store: bool,
    },

    /// Check which scheme derives a word from a root
    #[command(alias = "validate")]
    Check {
        /// The word to test, e.g. كاتب
        word: String,

        /// The root, e.g. كتب
        root: String,
    },

    /// Write the full lexicon snapshot (stdout if no file is given)
    Export {
        /// Destination file
        file: Option<PathBuf>,
    },

    /// Replace the whole lexicon with a snapshot file
    Import {
        /// Snapshot file to read
        file: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., seed-defaults)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RootCmd {
    /// Register a root
    Add {
        /// Three-character root, e.g. كتب
        root: String,
    },

    /// Remove a root and everything stored under it
    #[command(alias = "rm")]
    Remove {
        /// Three-character root, e.g. كتب
        root: String,
    },

    /// Check whether a root is registered
    Has {
        /// Three-character root, e.g. كتب
        root: String,
    },

    /// List every root with its stored derived words
    #[command(alias = "ls")]
    List,

    /// Bulk-load roots from a text file (whitespace-separated tokens)
    Load {
        /// Text file to scan for three-character roots
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum SchemeCmd {
    /// Add a scheme
    Add {
        /// Unique scheme name, e.g. فاعل
        name: String,

        /// Template with slots ف/ع/ل for radicals 1/2/3
        template: String,

        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Remove a scheme by name (stored words keep referencing it)
    #[command(alias = "rm")]
    Remove {
        /// Scheme name
        name: String,
    },

    /// List schemes in store order
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum WordCmd {
    /// Store a derived word under a root
    Add {
        /// Three-character root, e.g. كتب
        root: String,

        /// The derived word
        word: String,

        /// Scheme name it was derived with
        scheme: String,
    },

    /// List the derived words stored under a root
    #[command(alias = "ls")]
    List {
        /// Three-character root, e.g. كتب
        root: String,
    },

    /// Remove a stored word from a root (any scheme)
    #[command(alias = "rm")]
    Remove {
        /// Three-character root, e.g. كتب
        root: String,

        /// The stored word text
        word: String,
    },
}
