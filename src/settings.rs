//! Runtime configuration for an icon generation run.
//!
//! All options have defaults matching the conventional file names of a
//! hybrid-app project root. The value is built once from the CLI and passed
//! explicitly to the catalog, the source resolver, the preflight checks and
//! the pipeline; nothing reads configuration ambiently.

use std::path::PathBuf;

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Project manifest path (XML `<widget>` document).
    pub config_file: PathBuf,
    /// Default source image for all platforms.
    pub icon_file: PathBuf,
    /// Source image for Android adaptive-icon background layers.
    pub android_background: PathBuf,
    /// Source image for Android adaptive-icon foreground layers.
    pub android_foreground: PathBuf,
    /// Source image for Android notification icons.
    pub android_notification: PathBuf,
    /// Output base name for Android notification icons.
    pub android_notification_name: String,
    /// Legacy Android project layout: `res/` resource root and the
    /// pre-adaptive icon set.
    pub android_v6: bool,
    /// Pre-adaptive Android icon set with the modern `app/src/main/res/`
    /// resource root.
    pub android_v7: bool,
    /// Icon path layout of Xcode 8 and older (`Resources/icons/`), applied
    /// to both the iOS and macOS platform shells.
    pub old_xcode_path: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from("config.xml"),
            icon_file: PathBuf::from("icon.png"),
            android_background: PathBuf::from("icon_background.png"),
            android_foreground: PathBuf::from("icon_foreground.png"),
            android_notification: PathBuf::from("icon_notification.png"),
            android_notification_name: "ic_notification".to_string(),
            android_v6: false,
            android_v7: false,
            old_xcode_path: false,
        }
    }
}

impl Settings {
    /// Whether Android uses the pre-adaptive (legacy) icon tables.
    ///
    /// In legacy mode no adaptive layer files are generated, so the adaptive
    /// background/foreground source images are not required either.
    pub fn legacy_android(&self) -> bool {
        self.android_v6 || self.android_v7
    }
}
