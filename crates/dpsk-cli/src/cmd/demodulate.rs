// crates/dpsk-cli/src/cmd/demodulate.rs

use clap::{Args, ValueEnum};
use dpsk_core::profile::format::profile_id_hex;
use dpsk_core::signal::text::format_bits;
use dpsk_core::{Bit, Demodulator};

use crate::cmd::ProfileOpts;
use crate::io::{bin, jsonl, stimulus};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemodOutFmt {
    /// One line of '0'/'1'
    Text,
    /// MSB-first packed bytes (requires --out)
    Bin,
}

#[derive(Args, Debug)]
pub struct DemodulateArgs {
    /// Inline samples, e.g. "1000,-1000,1000"
    #[arg(long, allow_hyphen_values = true)]
    pub samples: Option<String>,

    /// Sample file path (signed integers, whitespace/comma separated)
    #[arg(long = "in")]
    pub r#in: Option<String>,

    /// Output path; if omitted, prints to stdout (text/monitor only)
    #[arg(long)]
    pub out: Option<String>,

    /// Output format for recovered bits
    #[arg(long, value_enum, default_value_t = DemodOutFmt::Text)]
    pub out_fmt: DemodOutFmt,

    /// Emit per-tick JSONL monitor records instead of recovered bits
    #[arg(long)]
    pub monitor: bool,

    #[command(flatten)]
    pub profile: ProfileOpts,
}

pub fn run(args: DemodulateArgs) -> anyhow::Result<()> {
    let profile = args.profile.resolve()?;
    let samples = stimulus::load_samples(args.samples.as_deref(), args.r#in.as_deref())?;

    let mut demodulator = Demodulator::new(&profile)?;
    let probes = demodulator.run_monitored(&samples, true)?;

    if args.monitor {
        let lines: Vec<String> = probes
            .iter()
            .enumerate()
            .map(|(i, p)| jsonl::demodulator_line(i, p))
            .collect();
        jsonl::write_lines(args.out.as_deref(), &lines)?;
    } else {
        let recovery = demodulator.recovery();
        let recovered: Vec<Bit> = probes.iter().map(|p| p.output(recovery)).collect();
        match args.out_fmt {
            DemodOutFmt::Text => {
                jsonl::write_lines(args.out.as_deref(), &[format_bits(&recovered)])?;
            }
            DemodOutFmt::Bin => {
                let p = args
                    .out
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("--out-fmt bin requires --out <file>"))?;
                bin::write_bits_file(p, &recovered)?;
            }
        }
    }

    tracing::info!(
        ticks = demodulator.stats.ticks,
        symbol_zeros = demodulator.stats.symbol_zeros,
        recovery = ?demodulator.recovery(),
        profile_id = %profile_id_hex(&profile),
        "demodulate ok"
    );
    Ok(())
}
