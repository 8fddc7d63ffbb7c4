// crates/dpsk-core/src/signal/mod.rs

pub mod bit;
pub mod sample;
pub mod text;

pub mod bitpack;
