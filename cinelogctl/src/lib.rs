//! cinelogctl: command line front end for cinelog
//!
//! The binary is a thin shell over this library: [`cli`] defines the
//! arguments, [`config`] resolves settings and [`commands`] does the work.

#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::Cli;
pub use config::{ConfigLoadError, ConfigSource, CtlConfig};
