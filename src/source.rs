//! Per-platform source image resolution.
//!
//! Any source image can be overridden for a single platform by dropping a
//! sibling file with the platform suffix next to it: `icon.png` is eclipsed
//! by `icon-android.png` for Android builds only. The override is picked up
//! by existence, never by flag.

use std::path::{Path, PathBuf};

use crate::platform::PlatformKind;

/// Picks the source image to use for one platform.
///
/// Returns the platform-suffixed sibling when it exists on disk, otherwise
/// the configured default. The default is returned as-is even when it is
/// itself missing; preflight owns reporting that.
pub async fn resolve(default: &Path, kind: PlatformKind) -> PathBuf {
    if let Some(candidate) = override_path(default, kind) {
        if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
            log::debug!(
                "using {} override {}",
                kind,
                candidate.display()
            );
            return candidate;
        }
    }
    default.to_path_buf()
}

/// Builds the platform-suffixed sibling path for a source image.
///
/// `assets/icon.png` becomes `assets/icon-android.png`. Paths without a file
/// stem or extension have no override form.
pub(crate) fn override_path(default: &Path, kind: PlatformKind) -> Option<PathBuf> {
    let stem = default.file_stem()?.to_str()?;
    let ext = default.extension()?.to_str()?;
    Some(default.with_file_name(format!("{stem}-{}.{ext}", kind.as_str())))
}
