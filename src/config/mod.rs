pub mod manifest;
pub mod using_config;
pub mod workspace;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "osdk")]
#[command(about = "Build orchestration for the open multi-platform IoT SDK")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run arbitrary idf.py commands (ESP32 only)
    ///
    /// Examples:
    ///     osdk idf clean
    ///     osdk idf --idf-flags="-v" menuconfig
    ///     osdk idf --idf-flags="-p /dev/ttyUSB0" flash
    Idf {
        /// Command and arguments forwarded to idf.py
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        idf_command: Vec<String>,

        /// Additional flags to pass to idf.py (e.g. "-v" or "-D CONFIG_EXAMPLE=1")
        #[arg(long, default_value = "")]
        idf_flags: String,
    },

    /// Select the active hardware platform and persist it to .config
    Config {
        /// Platform name, e.g. ESP32
        #[arg(long)]
        platform: String,
    },

    /// Show the project manifest and the configured platform
    Info,
}
