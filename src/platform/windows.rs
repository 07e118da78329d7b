//! Windows universal app tile catalog.
//!
//! Tiles are written straight to `platforms/windows/images`, so this is the
//! only platform whose output directory never varies with settings. The wide
//! tiles are the one place a non-square render target exists.

use std::path::PathBuf;

use super::{IconSpec, PlatformKind, PlatformSpec, squares};

const SQUARE_TILES: &[(&str, u32)] = &[
    ("StoreLogo.scale-100.png", 50),
    ("StoreLogo.scale-125.png", 63),
    ("StoreLogo.scale-140.png", 70),
    ("StoreLogo.scale-150.png", 75),
    ("StoreLogo.scale-180.png", 90),
    ("StoreLogo.scale-200.png", 100),
    ("StoreLogo.scale-240.png", 120),
    ("StoreLogo.scale-400.png", 200),
    ("Square44x44Logo.scale-100.png", 44),
    ("Square44x44Logo.scale-125.png", 55),
    ("Square44x44Logo.scale-140.png", 62),
    ("Square44x44Logo.scale-150.png", 66),
    ("Square44x44Logo.scale-200.png", 88),
    ("Square44x44Logo.scale-240.png", 106),
    ("Square44x44Logo.scale-400.png", 176),
    ("Square71x71Logo.scale-100.png", 71),
    ("Square71x71Logo.scale-125.png", 89),
    ("Square71x71Logo.scale-140.png", 99),
    ("Square71x71Logo.scale-150.png", 107),
    ("Square71x71Logo.scale-200.png", 142),
    ("Square71x71Logo.scale-240.png", 170),
    ("Square71x71Logo.scale-400.png", 284),
    ("Square150x150Logo.scale-100.png", 150),
    ("Square150x150Logo.scale-125.png", 188),
    ("Square150x150Logo.scale-140.png", 210),
    ("Square150x150Logo.scale-150.png", 225),
    ("Square150x150Logo.scale-200.png", 300),
    ("Square150x150Logo.scale-240.png", 360),
    ("Square150x150Logo.scale-400.png", 600),
    ("Square310x310Logo.scale-100.png", 310),
    ("Square310x310Logo.scale-125.png", 388),
    ("Square310x310Logo.scale-140.png", 434),
    ("Square310x310Logo.scale-150.png", 465),
    ("Square310x310Logo.scale-180.png", 558),
    ("Square310x310Logo.scale-200.png", 620),
    ("Square310x310Logo.scale-400.png", 1240),
];

/// Wide tiles as `(name, width, height)`, all at the 310x150 aspect ratio.
const WIDE_TILES: &[(&str, u32, u32)] = &[
    ("Wide310x150Logo.scale-80.png", 248, 120),
    ("Wide310x150Logo.scale-100.png", 310, 150),
    ("Wide310x150Logo.scale-125.png", 388, 188),
    ("Wide310x150Logo.scale-140.png", 434, 210),
    ("Wide310x150Logo.scale-150.png", 465, 225),
    ("Wide310x150Logo.scale-180.png", 558, 270),
    ("Wide310x150Logo.scale-200.png", 620, 300),
    ("Wide310x150Logo.scale-240.png", 744, 360),
    ("Wide310x150Logo.scale-400.png", 1240, 600),
];

pub(crate) fn spec() -> PlatformSpec {
    let mut icons = squares(SQUARE_TILES);
    icons.extend(
        WIDE_TILES
            .iter()
            .map(|&(name, width, height)| IconSpec::wide(name, width, height)),
    );
    PlatformSpec {
        kind: PlatformKind::Windows,
        output_dir: PathBuf::from("platforms/windows/images"),
        icons,
        adaptive_icons: Vec::new(),
        notification_icons: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_mixes_square_and_wide_tiles() {
        let spec = spec();
        assert_eq!(spec.icons.len(), 45);
        assert_eq!(spec.icons.iter().filter(|i| i.is_wide()).count(), 9);
    }

    #[test]
    fn wide_tile_scales_match_the_published_sizes() {
        let spec = spec();
        let dims = |name: &str| {
            let icon = spec.icons.iter().find(|i| i.name == name).unwrap();
            (icon.size, icon.render_height())
        };
        assert_eq!(dims("Wide310x150Logo.scale-80.png"), (248, 120));
        assert_eq!(dims("Wide310x150Logo.scale-100.png"), (310, 150));
        assert_eq!(dims("Wide310x150Logo.scale-400.png"), (1240, 600));
    }
}
