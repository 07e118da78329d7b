//! iOS launcher icon catalog.

use std::path::PathBuf;

use crate::settings::Settings;

use super::{PlatformKind, PlatformSpec, squares, xcode_icon_folder};

/// Icon sizes for current and legacy iPhone, iPad and Apple Watch targets.
///
/// The list carries a few historical duplicates; catalog construction keeps
/// the first entry for each name.
const ICONS: &[(&str, u32)] = &[
    ("icon-20.png", 20),
    ("icon-20@2x.png", 40),
    ("icon-20@3x.png", 60),
    ("icon-40.png", 40),
    ("icon-40@2x.png", 80),
    ("icon-50.png", 50),
    ("icon-50@2x.png", 100),
    ("icon-60@2x.png", 120),
    ("icon-60@3x.png", 180),
    ("icon-72.png", 72),
    ("icon-72@2x.png", 144),
    ("icon-76.png", 76),
    ("icon-76@2x.png", 152),
    ("icon-83.5@2x.png", 167),
    ("icon-1024.png", 1024),
    ("icon-29.png", 29),
    ("icon-29@2x.png", 58),
    ("icon-29@3x.png", 87),
    ("icon.png", 57),
    ("icon@2x.png", 114),
    ("icon-24@2x.png", 48),
    ("icon-27.5@2x.png", 55),
    ("icon-29@2x.png", 58),
    ("icon-29@3x.png", 87),
    ("icon-40@2x.png", 80),
    ("icon-44@2x.png", 88),
    ("icon-86@2x.png", 172),
    ("icon-98@2x.png", 196),
];

pub(crate) fn spec(project_name: &str, settings: &Settings) -> PlatformSpec {
    let output_dir = PathBuf::from("platforms/ios")
        .join(project_name)
        .join(xcode_icon_folder(settings));
    PlatformSpec {
        kind: PlatformKind::Ios,
        output_dir,
        icons: squares(ICONS),
        adaptive_icons: Vec::new(),
        notification_icons: Vec::new(),
    }
}
