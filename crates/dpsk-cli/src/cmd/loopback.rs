// crates/dpsk-cli/src/cmd/loopback.rs

use clap::Args;
use dpsk_core::pipeline::loopback::run_loopback;
use dpsk_core::profile::format::profile_id_hex;

use crate::cmd::ProfileOpts;
use crate::io::{jsonl, stimulus};

#[derive(Args, Debug)]
pub struct LoopbackArgs {
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

    /// Monitor output path; if omitted, prints to stdout
    #[arg(long)]
    pub out: Option<String>,

    /// Skip per-tick monitor output; only the verdict is logged
    #[arg(long)]
    pub quiet: bool,

    #[command(flatten)]
    pub profile: ProfileOpts,
}

pub fn run(args: LoopbackArgs) -> anyhow::Result<()> {
    let profile = args.profile.resolve()?;
    let bits = stimulus::load_bits(
        args.bits.as_deref(),
        args.r#in.as_deref(),
        args.in_fmt,
        args.bit_count,
    )?;

    let lb = run_loopback(&profile, &bits)?;

    if !args.quiet {
        let reset_ticks = profile.reset_ticks as usize;
        let lines: Vec<String> = lb
            .tx
            .iter()
            .zip(lb.rx.iter())
            .enumerate()
            .map(|(tick, (tx, rx))| {
                // Reset edges are not checked.
                let ok = tick < reset_ticks || !lb.mismatches.contains(&(tick - reset_ticks));
                jsonl::loopback_line(tick, tx, rx, ok)
            })
            .collect();
        jsonl::write_lines(args.out.as_deref(), &lines)?;
    }

    if !lb.passed() {
        anyhow::bail!(
            "loopback failed: {} of {} bits mismatched, first at bit {}",
            lb.mismatches.len(),
            bits.len(),
            lb.mismatches[0]
        );
    }

    tracing::info!(
        bits = bits.len(),
        reset_ticks = profile.reset_ticks,
        phase_flips = lb.tx_stats.phase_flips,
        recovery = ?profile.recovery,
        profile_id = %profile_id_hex(&profile),
        "loopback ok"
    );
    Ok(())
}
