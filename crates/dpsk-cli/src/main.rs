// crates/dpsk-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;
mod logging;

#[derive(Parser)]
#[command(name = "dpsk-cli")]
#[command(about = "DPSK modulator/demodulator simulator", long_about = None)]
pub struct Cli {
    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = logging::LogFormat::Compact)]
    pub log_format: logging::LogFormat,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Modulate a bit stream into carrier samples
    Modulate(cmd::modulate::ModulateArgs),

    /// Demodulate carrier samples into recovered bits
    Demodulate(cmd::demodulate::DemodulateArgs),

    /// Self-checking testbench: reset, modulate, demodulate, compare
    Loopback(cmd::loopback::LoopbackArgs),

    /// Profile tools (.dpr)
    Profile(cmd::profile::ProfileArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);

    match cli.cmd {
        Commands::Modulate(args) => cmd::modulate::run(args),
        Commands::Demodulate(args) => cmd::demodulate::run(args),
        Commands::Loopback(args) => cmd::loopback::run(args),
        Commands::Profile(args) => cmd::profile::run(args),
    }
}
