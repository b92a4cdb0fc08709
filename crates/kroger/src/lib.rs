pub mod client;

pub use client::{KrogerClient, KrogerError};
