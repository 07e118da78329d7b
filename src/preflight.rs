//! Preflight checks run before any icon is rendered.
//!
//! Three gates, in order: at least one platform is installed, every required
//! source image exists, and the project manifest exists. A failing gate
//! reports everything wrong with it at once, so a user missing both adaptive
//! layers learns about both in a single run.

use std::path::Path;

use crate::cli::OutputManager;
use crate::error::Error;
use crate::platform::PlatformKind;
use crate::settings::Settings;

/// Runs all preflight gates against the current project.
///
/// Required source images depend on settings: the primary icon and the
/// notification source are always required, the adaptive background and
/// foreground layers only when Android uses the adaptive icon tables.
/// Source checks cover Android inputs even when Android itself is not
/// installed, so a project gains no surprises when the platform is added
/// later.
///
/// On failure returns every error the failing gate produced; all of them
/// carry exit code `1`.
pub async fn run(
    settings: &Settings,
    detected: &[PlatformKind],
    output: &OutputManager,
) -> std::result::Result<(), Vec<Error>> {
    if detected.is_empty() {
        output.error(
            "no platforms found. Make sure you are in the root folder of your project \
             and add platforms with 'cordova platform add'",
        );
        return Err(vec![Error::NoPlatformsFound]);
    }
    let names: Vec<&str> = detected.iter().map(|k| k.as_str()).collect();
    output.success(&format!("platforms found: {}", names.join(", ")));

    let mut errors = Vec::new();
    if settings.legacy_android() {
        let (icon, notification) = tokio::join!(
            check_source(&settings.icon_file, output),
            check_source(&settings.android_notification, output),
        );
        errors.extend(icon);
        errors.extend(notification);
    } else {
        let (icon, background, foreground, notification) = tokio::join!(
            check_source(&settings.icon_file, output),
            check_source(&settings.android_background, output),
            check_source(&settings.android_foreground, output),
            check_source(&settings.android_notification, output),
        );
        errors.extend(icon);
        errors.extend(background);
        errors.extend(foreground);
        errors.extend(notification);
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    if tokio::fs::try_exists(&settings.config_file)
        .await
        .unwrap_or(false)
    {
        output.success(&format!("{} exists", settings.config_file.display()));
        Ok(())
    } else {
        output.error(&format!(
            "{} does not exist",
            settings.config_file.display()
        ));
        Err(vec![Error::MissingManifest {
            path: settings.config_file.clone(),
        }])
    }
}

async fn check_source(path: &Path, output: &OutputManager) -> Option<Error> {
    if tokio::fs::try_exists(path).await.unwrap_or(false) {
        output.success(&format!("{} exists", path.display()));
        None
    } else {
        output.error(&format!("{} does not exist", path.display()));
        Some(Error::MissingSourceImage {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    fn quiet() -> OutputManager {
        OutputManager::new(false, true)
    }

    fn settings_in(dir: &Path) -> Settings {
        Settings {
            config_file: dir.join("config.xml"),
            icon_file: dir.join("icon.png"),
            android_background: dir.join("icon_background.png"),
            android_foreground: dir.join("icon_foreground.png"),
            android_notification: dir.join("icon_notification.png"),
            ..Settings::default()
        }
    }

    fn touch(path: &PathBuf) {
        std::fs::write(path, b"x").unwrap();
    }

    #[tokio::test]
    async fn no_platforms_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let errors = run(&settings_in(dir.path()), &[], &quiet())
            .await
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], Error::NoPlatformsFound));
    }

    #[tokio::test]
    async fn complete_project_passes_every_gate() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        touch(&settings.icon_file);
        touch(&settings.android_background);
        touch(&settings.android_foreground);
        touch(&settings.android_notification);
        touch(&settings.config_file);

        run(&settings, &[PlatformKind::Ios], &quiet())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn both_missing_layers_are_reported_together() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        touch(&settings.icon_file);
        touch(&settings.android_notification);
        touch(&settings.config_file);

        let errors = run(&settings, &[PlatformKind::Android], &quiet())
            .await
            .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(
            errors
                .iter()
                .all(|e| matches!(e, Error::MissingSourceImage { .. }))
        );
    }

    #[tokio::test]
    async fn legacy_android_does_not_need_adaptive_layers() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings_in(dir.path());
        settings.android_v7 = true;
        touch(&settings.icon_file);
        touch(&settings.android_notification);
        touch(&settings.config_file);

        run(&settings, &[PlatformKind::Android], &quiet())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn manifest_gate_runs_after_source_gate() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        touch(&settings.icon_file);
        touch(&settings.android_background);
        touch(&settings.android_foreground);
        touch(&settings.android_notification);

        let errors = run(&settings, &[PlatformKind::Ios], &quiet())
            .await
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], Error::MissingManifest { .. }));
    }
}
