// crates/dpsk-cli/src/io/jsonl.rs

use anyhow::Context;
use dpsk_core::pipeline::monitor::{DemodulatorProbe, ModulatorProbe};

/// Format: {"tick":N,"reset":B,"bit":N,"delayed":N,"encoded":N,"sample":N}
pub fn modulator_line(tick: usize, p: &ModulatorProbe) -> String {
    format!(
        "{{\"tick\":{},\"reset\":{},\"bit\":{},\"delayed\":{},\"encoded\":{},\"sample\":{}}}",
        tick, p.reset, p.bit, p.delayed, p.encoded, p.sample
    )
}

/// Format: {"tick":N,"reset":B,"sample":N,"extracted":N,"delayed":N,"symbol":N,"data":N}
pub fn demodulator_line(tick: usize, p: &DemodulatorProbe) -> String {
    format!(
        "{{\"tick\":{},\"reset\":{},\"sample\":{},\"extracted\":{},\"delayed\":{},\"symbol\":{},\"data\":{}}}",
        tick, p.reset, p.sample, p.extracted, p.delayed, p.symbol, p.data
    )
}

/// Testbench line: transmit and receive edges of the same tick side by side.
pub fn loopback_line(tick: usize, tx: &ModulatorProbe, rx: &DemodulatorProbe, ok: bool) -> String {
    format!(
        "{{\"tick\":{},\"reset\":{},\"bit\":{},\"encoded\":{},\"sample\":{},\"extracted\":{},\"symbol\":{},\"data\":{},\"ok\":{}}}",
        tick, tx.reset, tx.bit, tx.encoded, tx.sample, rx.extracted, rx.symbol, rx.data, ok
    )
}

/// Write lines to `path`, or to stdout when `path` is None.
pub fn write_lines(path: Option<&str>, lines: &[String]) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            let mut s = String::new();
            for l in lines {
                s.push_str(l);
                s.push('\n');
            }
            std::fs::write(p, s).with_context(|| format!("write lines: {p}"))?;
        }
        None => {
            for l in lines {
                println!("{l}");
            }
        }
    }
    Ok(())
}
