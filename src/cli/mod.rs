pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Classical text ciphers: Atbash, Caesar and Vigenère.
#[derive(Parser, Debug)]
#[command(name = "ciphersphere", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print the outcome as JSON: {"success": .., "result"|"error": ..}
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: suppress warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to alternative config file
    #[arg(long, global = true, env = "CIPHERSPHERE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt text
    Encrypt(TransformArgs),

    /// Decrypt text
    Decrypt(TransformArgs),

    /// Run a JSON request and print the JSON outcome
    Apply {
        /// Request file (default: read from stdin)
        #[arg(long)]
        request: Option<PathBuf>,
    },

    /// List supported cipher methods and their keys
    Methods,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TransformArgs {
    /// Text to transform (default: --file, then stdin)
    pub text: Option<String>,

    /// Cipher method: atbash, caesar or vigenere
    #[arg(short, long)]
    pub method: Option<String>,

    /// Key: shift for caesar, keyword for vigenere, none for atbash
    #[arg(short, long, allow_hyphen_values = true)]
    pub key: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}
