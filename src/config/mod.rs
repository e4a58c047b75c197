//! Configuration module for sitecontrols
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ControlsPaths;
pub use settings::Settings;
