//! Password generation and output.

pub mod alphabet;
mod generate;
pub mod output;
#[cfg(test)]
mod wipe_check;

pub use generate::{Password, generate, generate_batch, generate_into};
