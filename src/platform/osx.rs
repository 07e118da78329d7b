//! macOS launcher icon catalog.
//!
//! The `osx` platform reuses the Xcode asset layout from iOS, including the
//! legacy `Resources/icons` fallback, but ships a much shorter size list.

use std::path::PathBuf;

use crate::settings::Settings;

use super::{PlatformKind, PlatformSpec, squares, xcode_icon_folder};

const ICONS: &[(&str, u32)] = &[
    ("icon-16x16.png", 16),
    ("icon-32x32.png", 32),
    ("icon-64x64.png", 64),
    ("icon-128x128.png", 128),
    ("icon-256x256.png", 256),
    ("icon-512x512.png", 512),
];

pub(crate) fn spec(project_name: &str, settings: &Settings) -> PlatformSpec {
    let output_dir = PathBuf::from("platforms/osx")
        .join(project_name)
        .join(xcode_icon_folder(settings));
    PlatformSpec {
        kind: PlatformKind::Osx,
        output_dir,
        icons: squares(ICONS),
        adaptive_icons: Vec::new(),
        notification_icons: Vec::new(),
    }
}
