// crates/dpsk-cli/src/cmd/profile.rs

use clap::{Args, Subcommand};
use dpsk_core::profile::format::profile_id_hex;
use dpsk_core::validate::validate_profile;

use crate::cmd::ProfileOpts;
use crate::io::profile_file;

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub cmd: ProfileCmd,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCmd {
    /// Write a .dpr built from the default profile plus overrides
    New(NewArgs),
    /// Print a decoded .dpr and its id
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Output .dpr path
    #[arg(long)]
    pub out: String,

    #[command(flatten)]
    pub opts: ProfileOpts,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input .dpr path
    #[arg(long = "in")]
    pub r#in: String,
}

pub fn run(args: ProfileArgs) -> anyhow::Result<()> {
    match args.cmd {
        ProfileCmd::New(a) => {
            let p = a.opts.resolve()?;
            profile_file::save_dpr(&a.out, &p)?;
            tracing::info!(out = %a.out, profile_id = %profile_id_hex(&p), "profile written");
            Ok(())
        }
        ProfileCmd::Inspect(a) => {
            let p = profile_file::load_dpr(&a.r#in)?;
            println!("version={}", p.version);
            println!("width_bits={}", p.width_bits);
            println!("amplitude={}", p.amplitude);
            println!("delay_init={}", p.delay_init);
            println!("recovery={:?}", p.recovery);
            println!("reset_ticks={}", p.reset_ticks);
            println!("profile_id={}", profile_id_hex(&p));
            if let Err(e) = validate_profile(&p) {
                tracing::warn!(error = %e, "profile decodes but is not runnable");
            }
            Ok(())
        }
    }
}
