// crates/dpsk-cli/src/io/mod.rs

pub mod bin;
pub mod jsonl;
pub mod profile_file;
pub mod stimulus;
