pub mod error;
pub mod validate;

pub mod dynamics;
pub mod pipeline;
pub mod profile;
pub mod signal;
pub mod stats;

pub use crate::pipeline::demodulator::Demodulator;
pub use crate::pipeline::modulator::Modulator;
pub use crate::pipeline::{demodulate, modulate};
pub use crate::profile::profile::{Profile, Recovery};
pub use crate::signal::bit::Bit;
pub use crate::signal::sample::{Sample, SampleWidth};
