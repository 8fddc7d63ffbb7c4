// crates/dpsk-cli/src/cmd/modulate.rs

use clap::Args;
use dpsk_core::profile::format::profile_id_hex;
use dpsk_core::Modulator;

use crate::cmd::ProfileOpts;
use crate::io::{jsonl, stimulus};

#[derive(Args, Debug)]
pub struct ModulateArgs {
    /// Inline bit stimulus, e.g. "10110011"
    #[arg(long)]
    pub bits: Option<String>,

    /// Stimulus file path
    #[arg(long = "in")]
    pub r#in: Option<String>,

    /// Stimulus file format
    #[arg(long, value_enum, default_value_t = stimulus::BitFmt::Text)]
    pub in_fmt: stimulus::BitFmt,

    /// Bits to read from a packed (--in-fmt bin) file; default: all
    #[arg(long)]
    pub bit_count: Option<usize>,

    /// Output path; if omitted, prints to stdout
    #[arg(long)]
    pub out: Option<String>,

    /// Emit per-tick JSONL monitor records instead of bare samples
    #[arg(long)]
    pub monitor: bool,

    #[command(flatten)]
    pub profile: ProfileOpts,
}

pub fn run(args: ModulateArgs) -> anyhow::Result<()> {
    let profile = args.profile.resolve()?;
    let bits = stimulus::load_bits(
        args.bits.as_deref(),
        args.r#in.as_deref(),
        args.in_fmt,
        args.bit_count,
    )?;

    let mut modulator = Modulator::new(&profile)?;
    let probes = modulator.run_monitored(&bits, true);

    let lines: Vec<String> = if args.monitor {
        probes
            .iter()
            .enumerate()
            .map(|(i, p)| jsonl::modulator_line(i, p))
            .collect()
    } else {
        probes.iter().map(|p| p.sample.to_string()).collect()
    };
    jsonl::write_lines(args.out.as_deref(), &lines)?;

    tracing::info!(
        ticks = modulator.stats.ticks,
        phase_flips = modulator.stats.phase_flips,
        profile_id = %profile_id_hex(&profile),
        "modulate ok"
    );
    Ok(())
}
