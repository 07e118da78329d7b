//! Android launcher, adaptive and notification icon catalog.
//!
//! Android has two on-disk layouts. The Android Studio layout keeps resources
//! under `app/src/main/res` and names launchers `ic_launcher.png`; projects
//! pinned to cordova-android 6.x or 7.x use the older `icon.png` name, with
//! 6.x additionally keeping `res/` at the platform root. Adaptive icons only
//! exist in the modern layout.

use std::path::PathBuf;

use crate::settings::Settings;

use super::{AdaptiveIconSpec, IconLayer, IconSpec, PlatformKind, PlatformSpec};

/// Density directories receiving a launcher icon, with their edge lengths.
const LAUNCHER_DIRS: &[(&str, u32)] = &[
    ("drawable", 96),
    ("drawable-hdpi", 72),
    ("drawable-ldpi", 36),
    ("drawable-mdpi", 48),
    ("drawable-xhdpi", 96),
    ("drawable-xxhdpi", 144),
    ("drawable-xxxhdpi", 192),
    ("mipmap-hdpi", 72),
    ("mipmap-ldpi", 36),
    ("mipmap-mdpi", 48),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// Densities receiving adaptive layers, with the layer edge length.
///
/// Layers are bigger than launchers from xhdpi up because the launcher mask
/// is cut from the centre of the layer at runtime.
const ADAPTIVE_DENSITIES: &[(&str, u32)] = &[
    ("hdpi", 72),
    ("ldpi", 36),
    ("mdpi", 48),
    ("xhdpi", 216),
    ("xxhdpi", 324),
    ("xxxhdpi", 432),
];

/// Density directories receiving a notification icon.
const NOTIFICATION_DIRS: &[(&str, u32)] = &[
    ("mipmap-hdpi", 72),
    ("mipmap-ldpi", 36),
    ("mipmap-mdpi", 48),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

fn layer_file(layer: IconLayer) -> &'static str {
    match layer {
        IconLayer::Background => "background.png",
        IconLayer::Foreground => "foreground.png",
    }
}

pub(crate) fn spec(settings: &Settings) -> PlatformSpec {
    let legacy = settings.legacy_android();
    let res_root = if settings.android_v6 {
        "platforms/android/res"
    } else {
        "platforms/android/app/src/main/res"
    };
    let launcher = if legacy { "icon.png" } else { "ic_launcher.png" };

    let icons = LAUNCHER_DIRS
        .iter()
        .map(|&(dir, size)| IconSpec::square(format!("{dir}/{launcher}"), size))
        .collect();

    let adaptive_icons = if legacy {
        Vec::new()
    } else {
        ADAPTIVE_DENSITIES
            .iter()
            .flat_map(|&(density, size)| {
                [IconLayer::Background, IconLayer::Foreground]
                    .into_iter()
                    .map(move |layer| AdaptiveIconSpec {
                        icon: IconSpec::square(
                            format!("mipmap-{density}-v26/ic_launcher_{}", layer_file(layer)),
                            size,
                        ),
                        layer,
                    })
            })
            .collect()
    };

    let notification_icons = NOTIFICATION_DIRS
        .iter()
        .map(|&(dir, size)| {
            IconSpec::square(
                format!("{dir}/{}.png", settings.android_notification_name),
                size,
            )
        })
        .collect();

    PlatformSpec {
        kind: PlatformKind::Android,
        output_dir: PathBuf::from(res_root),
        icons,
        adaptive_icons,
        notification_icons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_layout_uses_ic_launcher_and_adaptive_layers() {
        let spec = spec(&Settings::default());
        assert_eq!(spec.output_dir, PathBuf::from("platforms/android/app/src/main/res"));
        assert_eq!(spec.icons.len(), 13);
        assert!(spec.icons.iter().all(|i| i.name.ends_with("/ic_launcher.png")));
        assert_eq!(spec.adaptive_icons.len(), 12);
    }

    #[test]
    fn adaptive_layers_alternate_background_then_foreground() {
        let spec = spec(&Settings::default());
        for pair in spec.adaptive_icons.chunks(2) {
            assert_eq!(pair[0].layer, IconLayer::Background);
            assert_eq!(pair[1].layer, IconLayer::Foreground);
            assert_eq!(pair[0].icon.size, pair[1].icon.size);
        }
        let xhdpi_bg = spec
            .adaptive_icons
            .iter()
            .find(|a| a.icon.name == "mipmap-xhdpi-v26/ic_launcher_background.png")
            .unwrap();
        assert_eq!(xhdpi_bg.icon.size, 216);
    }

    #[test]
    fn v7_keeps_modern_root_but_legacy_launcher_name() {
        let mut settings = Settings::default();
        settings.android_v7 = true;
        let spec = spec(&settings);
        assert_eq!(spec.output_dir, PathBuf::from("platforms/android/app/src/main/res"));
        assert!(spec.icons.iter().all(|i| i.name.ends_with("/icon.png")));
        assert!(spec.adaptive_icons.is_empty());
    }

    #[test]
    fn v6_moves_res_to_platform_root() {
        let mut settings = Settings::default();
        settings.android_v6 = true;
        let spec = spec(&settings);
        assert_eq!(spec.output_dir, PathBuf::from("platforms/android/res"));
        assert!(spec.adaptive_icons.is_empty());
    }

    #[test]
    fn notification_icons_use_configured_name() {
        let mut settings = Settings::default();
        settings.android_notification_name = "ic_stat_push".into();
        let spec = spec(&settings);
        assert_eq!(spec.notification_icons.len(), 6);
        assert!(
            spec.notification_icons
                .iter()
                .all(|i| i.name.ends_with("/ic_stat_push.png"))
        );
    }
}
