pub mod config;

pub use config::{Environment, NormalizationStrategy, Settings};
