//! Command line argument parsing and validation.
//!
//! This module provides minimal CLI argument parsing.
//! The tool is designed to "just work" - run it from the project root with
//! an `icon.png` next to `config.xml` and every installed platform gets its
//! icons.

use std::path::PathBuf;

use clap::Parser;

use crate::settings::Settings;

/// Icon generator for hybrid-app projects
#[derive(Parser, Debug)]
#[command(
    name = "appicon",
    version,
    about = "Generate platform icon assets from source PNGs",
    long_about = "Generate launcher, adaptive and notification icons for every \
platform installed under platforms/.

Run from the project root. Any source image can be overridden for a single \
platform with a suffixed sibling file, e.g. icon-android.png."
)]
pub struct Args {
    /// Project manifest to read the application name from
    #[arg(long, value_name = "FILE", default_value = "config.xml")]
    pub config: PathBuf,

    /// Source image for launcher icons
    #[arg(long, value_name = "FILE", default_value = "icon.png")]
    pub icon: PathBuf,

    /// Source image for Android adaptive-icon background layers
    #[arg(long, value_name = "FILE", default_value = "icon_background.png")]
    pub icon_background: PathBuf,

    /// Source image for Android adaptive-icon foreground layers
    #[arg(long, value_name = "FILE", default_value = "icon_foreground.png")]
    pub icon_foreground: PathBuf,

    /// Source image for Android notification icons
    #[arg(long, value_name = "FILE", default_value = "icon_notification.png")]
    pub icon_notification: PathBuf,

    /// Output base name for Android notification icons
    #[arg(long, value_name = "NAME", default_value = "ic_notification")]
    pub icon_notification_name: String,

    /// Target the cordova-android 6.x layout: res/ at the platform root,
    /// pre-adaptive icon set
    #[arg(long)]
    pub android_v6: bool,

    /// Target the cordova-android 7.x layout: modern resource root,
    /// pre-adaptive icon set
    #[arg(long)]
    pub android_v7: bool,

    /// Use the icon path layout of Xcode 8 and older (Resources/icons)
    #[arg(long)]
    pub xcode_old: bool,

    /// Print extra progress detail
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress everything except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.icon_notification_name.is_empty() {
            return Err("notification icon name must not be empty".to_string());
        }
        // The name becomes a file stem inside density directories.
        if self.icon_notification_name.contains(['/', '\\']) {
            return Err(format!(
                "notification icon name '{}' must not contain path separators",
                self.icon_notification_name
            ));
        }

        Ok(())
    }

    /// Build run settings from the parsed arguments
    pub fn settings(&self) -> Settings {
        Settings {
            config_file: self.config.clone(),
            icon_file: self.icon.clone(),
            android_background: self.icon_background.clone(),
            android_foreground: self.icon_foreground.clone(),
            android_notification: self.icon_notification.clone(),
            android_notification_name: self.icon_notification_name.clone(),
            android_v6: self.android_v6,
            android_v7: self.android_v7,
            old_xcode_path: self.xcode_old,
        }
    }
}
