use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use ipgen_common::config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "ipgen")]
#[command(about = "Expands CIDR blocks and start-end ranges into individual IPv4 addresses.")]
#[command(group(ArgGroup::new("source").required(true).args(["range", "input"])))]
pub struct CommandLine {
    /// Single IP range (CIDR or start-end)
    #[arg(short, long)]
    pub range: Option<String>,

    /// File containing multiple ranges, one per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output filename
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Output format (txt or json)
    #[arg(long)]
    pub format: OutputFormat,

    /// Print progress while generating
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip addresses that were already generated
    #[arg(long)]
    pub unique: bool,

    /// Print the total number of generated addresses
    #[arg(long)]
    pub count: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            verbose: self.verbose,
            unique: self.unique,
            count: self.count,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
