pub mod distribution;
pub mod error;
pub mod ids;
pub mod range;

#[cfg(test)]
mod tests;
