// crates/dpsk-core/src/dynamics/mod.rs

pub mod clocked;
pub mod state;

pub mod carrier;
pub mod codec;
pub mod delay;
pub mod extract;
pub mod recovery;
