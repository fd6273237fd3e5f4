//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use clap_complete::Shell;

/// Deterministic state-transition-system CSV fixture generator
///
/// Emits a chain of NUM_VARS variable-setting edges followed by a complete
/// binary tree of depth DEPTH. With no positionals, the built-in defaults
/// (10, 5) are used; supplying only one of the two is a usage error.
#[derive(Parser, Debug)]
#[command(name = "stsgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of chain variables (requires DEPTH; default 10)
    #[arg(value_name = "NUM_VARS", requires = "depth")]
    pub num_vars: Option<u32>,

    /// Depth of the complete binary tree (default 5)
    #[arg(value_name = "DEPTH")]
    pub depth: Option<u32>,

    /// Output file (default: big_v{NUM_VARS}_d{DEPTH}.csv in cwd)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Enable debug logging (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions and exit
    #[arg(long = "generate", value_enum, value_name = "SHELL")]
    pub generator: Option<Shell>,
}
