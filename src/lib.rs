//! Utilities for validating install configurations and rendering install
//! badges.
//!
//! The library exposes a small set of independent, composable pure functions
//! over a shared configuration model: structural validation, operating-system
//! detection from a user-agent string, install-target resolution, badge SVG
//! synthesis, and embed-snippet generation. File handling and the HTTP host
//! compose these helpers without adding state of their own.

mod badge;
mod config;
mod detect;
mod error;
mod parse;
mod resolve;
mod snippet;
mod template;
mod validate;

pub mod server;

pub use badge::{render_badge, write_badge};
pub use config::{
    BadgeConfig, Config, DEFAULT_BADGE_COLOR, DEFAULT_BADGE_LABEL, DEFAULT_BADGE_STYLE, Platform
};
pub use detect::{DetectedOs, detect_os};
pub use error::{Error, badge_io_error, io_error};
pub use parse::{load_config, parse_config};
pub use resolve::{InstallTarget, install_target};
pub use snippet::{DEFAULT_BADGE_PATH, Snippets, render_snippets};
pub use template::config_template;
pub use validate::{ValidationReport, validate_config};
