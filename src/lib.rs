pub mod config;
pub mod error;
pub mod predict;

pub use error::{Error, Result};
