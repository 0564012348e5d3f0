pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use domain::{increment, normalize, Increment, Normalized, Severity, TagIncrementer, Version};
pub use error::{ChannelTagError, Result};
