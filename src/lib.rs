//! # appicon
//!
//! Build-time icon generation for hybrid-app projects.
//!
//! Takes a small set of source PNGs from the project root and renders every
//! launcher, adaptive and notification icon required by the platforms
//! installed under `platforms/`, writing them straight into each platform's
//! expected asset layout.
//!
//! ## Features
//!
//! - **Full catalogs**: iOS, Android, macOS and Windows size tables, wide
//!   Windows tiles included
//! - **Adaptive icons**: Android background/foreground layers from separate
//!   source images
//! - **Per-platform overrides**: `icon-android.png` eclipses `icon.png` for
//!   Android only, by existence
//! - **Fault isolation**: one broken icon never stops the rest of the run
//! - **Scriptable exit codes**: `0` clean, `1` preflight failure, `2` partial
//!   render failure
//!
//! ## Usage
//!
//! ```bash
//! appicon                      # Generate icons for every installed platform
//! appicon --android-v7         # Pre-adaptive Android icon set
//! appicon --xcode-old          # Resources/icons layout for old Xcode
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod platform;
pub mod preflight;
pub mod project;
pub mod render;
pub mod settings;
pub mod source;

// Re-export main types for public API
pub use cli::{Args, OutputManager};
pub use error::{Error, ErrorExt, Result};
pub use pipeline::{Pipeline, PlatformReport, RunReport};
pub use platform::{IconSpec, PlatformKind, PlatformSpec};
pub use settings::Settings;
