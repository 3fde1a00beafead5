//! Configuration for tallybook
//!
//! Currently this is just path management; there is no settings file.

pub mod paths;

pub use paths::TallyPaths;
