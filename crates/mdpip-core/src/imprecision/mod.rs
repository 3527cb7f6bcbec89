pub mod config;
pub mod error;
pub mod generator;
pub mod narrowing;
pub mod relaxed;
pub mod snapshot;

#[cfg(test)]
mod tests;
