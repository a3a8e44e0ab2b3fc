//! # release-scout
//!
//! A git change analysis and release suggestion toolkit written in Rust.
//!
//! ## Features
//!
//! - Classifies working tree changes into conventional commit categories
//! - Suggests version bumps from commit history
//! - Audits release automation setup (release-please, workflows, hooks)
//!
//! ## Quick Start
//!
//! ```rust
//! use release_scout::classify::{ChangeClassifier, ChangeRecord};
//!
//! let changes = vec![ChangeRecord::new(" M", "src/App.tsx")];
//! let analysis = ChangeClassifier::classify(&changes);
//! assert!(analysis.has_changes);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod classify;
pub mod cli;
pub mod config;
pub mod data;
pub mod git;
pub mod version;

pub use crate::cli::Cli;

/// The current version of release-scout.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
