//! Platform icon catalogs and detection.
//!
//! Each supported platform contributes a [`PlatformSpec`]: the directory its
//! icons are written beneath plus every render target that belongs there.
//!
//! # Supported Platforms
//!
//! | Platform | Output root | Module |
//! |----------|-------------|--------|
//! | iOS | `platforms/ios/<project>/<asset folder>` | [`ios`](self) |
//! | Android | `platforms/android/app/src/main/res` | [`android`](self) |
//! | macOS | `platforms/osx/<project>/<asset folder>` | [`osx`](self) |
//! | Windows | `platforms/windows/images` | [`windows`](self) |
//!
//! # Catalog Construction
//!
//! [`catalog`] is pure: it consults only the project name and [`Settings`],
//! never the filesystem, so the same inputs always yield the same targets.
//! [`list_platforms`] layers the on-disk presence check on top.

mod android;
mod ios;
mod osx;
mod windows;

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use crate::project;
use crate::settings::Settings;

/// Platforms the generator knows how to populate.
///
/// The variants match the directory names Cordova-style projects use under
/// `platforms/`, which is also how a platform is detected as installed.
///
/// # Examples
///
/// ```no_run
/// use appicon::platform::PlatformKind;
///
/// for kind in PlatformKind::ALL {
///     println!("{kind} lives at {}", kind.detection_path());
/// }
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum PlatformKind {
    /// Apple iOS and watchOS.
    Ios,
    /// Android, both Android Studio and pre-Studio layouts.
    Android,
    /// Apple macOS. Project trees name this platform `osx`.
    Osx,
    /// Windows universal apps.
    Windows,
}

impl PlatformKind {
    /// Every known platform, in generation order.
    pub const ALL: [PlatformKind; 4] = [
        PlatformKind::Ios,
        PlatformKind::Android,
        PlatformKind::Osx,
        PlatformKind::Windows,
    ];

    /// Short identifier used in CLI output and source-override suffixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::Ios => "ios",
            PlatformKind::Android => "android",
            PlatformKind::Osx => "osx",
            PlatformKind::Windows => "windows",
        }
    }

    /// Project-relative directory whose existence marks the platform as added.
    pub fn detection_path(&self) -> &'static str {
        match self {
            PlatformKind::Ios => "platforms/ios",
            PlatformKind::Android => "platforms/android",
            PlatformKind::Osx => "platforms/osx",
            PlatformKind::Windows => "platforms/windows",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single icon render target.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconSpec {
    /// Output path relative to the platform's output directory.
    pub name: String,
    /// Edge length in pixels, or the width for non-square targets.
    pub size: u32,
    /// Height in pixels when the target is not square.
    pub height: Option<u32>,
}

impl IconSpec {
    pub(crate) fn square(name: impl Into<String>, size: u32) -> Self {
        IconSpec {
            name: name.into(),
            size,
            height: None,
        }
    }

    pub(crate) fn wide(name: impl Into<String>, width: u32, height: u32) -> Self {
        IconSpec {
            name: name.into(),
            size: width,
            height: Some(height),
        }
    }

    /// Pixel height the rendered file must have.
    pub fn render_height(&self) -> u32 {
        self.height.unwrap_or(self.size)
    }

    /// Whether the target needs a centre crop after resizing.
    pub fn is_wide(&self) -> bool {
        self.height.is_some()
    }
}

/// Which adaptive-icon layer a render target is cut from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IconLayer {
    /// Fill layer drawn behind the launcher artwork.
    Background,
    /// Artwork layer drawn above the background fill.
    Foreground,
}

/// Adaptive launcher icon target paired with its source layer.
#[derive(Clone, Debug)]
pub struct AdaptiveIconSpec {
    /// Render target for the layer.
    pub icon: IconSpec,
    /// Layer image the target is generated from.
    pub layer: IconLayer,
}

/// Complete set of render targets for one platform.
#[derive(Clone, Debug)]
pub struct PlatformSpec {
    /// Platform these targets belong to.
    pub kind: PlatformKind,
    /// Directory all targets are written beneath, relative to the project root.
    pub output_dir: PathBuf,
    /// Launcher icons generated from the primary source image.
    pub icons: Vec<IconSpec>,
    /// Adaptive launcher layers. Empty outside Android's modern layout.
    pub adaptive_icons: Vec<AdaptiveIconSpec>,
    /// Status-bar notification icons. Empty outside Android.
    pub notification_icons: Vec<IconSpec>,
}

impl PlatformSpec {
    /// Total number of files generating this platform will produce.
    pub fn task_count(&self) -> usize {
        self.icons.len() + self.adaptive_icons.len() + self.notification_icons.len()
    }
}

/// A platform catalog together with its presence in the current project.
#[derive(Clone, Debug)]
pub struct ResolvedPlatform {
    /// Render catalog for the platform.
    pub spec: PlatformSpec,
    /// True when the platform directory exists under `platforms/`.
    pub is_present: bool,
}

/// Builds the render catalog for every known platform.
///
/// # Examples
///
/// ```no_run
/// use appicon::platform;
/// use appicon::settings::Settings;
///
/// let specs = platform::catalog("MyApp", &Settings::default());
/// for spec in &specs {
///     println!("{}: {} files", spec.kind, spec.task_count());
/// }
/// ```
pub fn catalog(project_name: &str, settings: &Settings) -> Vec<PlatformSpec> {
    vec![
        ios::spec(project_name, settings),
        android::spec(settings),
        osx::spec(project_name, settings),
        windows::spec(),
    ]
}

/// Pairs every platform catalog with whether the platform is installed.
pub async fn list_platforms(project_name: &str, settings: &Settings) -> Vec<ResolvedPlatform> {
    let mut resolved = Vec::with_capacity(PlatformKind::ALL.len());
    for spec in catalog(project_name, settings) {
        let is_present = project::platform_present(spec.kind).await;
        resolved.push(ResolvedPlatform { spec, is_present });
    }
    resolved
}

/// Asset folder inside an Xcode project tree where icons land.
pub(crate) fn xcode_icon_folder(settings: &Settings) -> &'static str {
    if settings.old_xcode_path {
        "Resources/icons"
    } else {
        "Assets.xcassets/AppIcon.appiconset"
    }
}

/// Expands a `(name, edge)` table into square icon specs.
///
/// Duplicate names are shed, keeping the first occurrence, so catalogs can
/// carry historical size lists verbatim without emitting a file twice.
pub(crate) fn squares(table: &[(&str, u32)]) -> Vec<IconSpec> {
    let mut seen = HashSet::new();
    table
        .iter()
        .filter(|(name, _)| seen.insert(*name))
        .map(|&(name, size)| IconSpec::square(name, size))
        .collect()
}
