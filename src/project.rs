//! Project inspection: installed-platform detection and manifest parsing.
//!
//! The project root is the process working directory, the same place the
//! platform tooling is normally invoked from. Detection is purely
//! directory-based; a `platforms/ios` directory means iOS icons get built.

use std::io;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{Error, ErrorExt, Result};
use crate::platform::PlatformKind;

/// Lists the platforms whose directories exist under `platforms/`.
pub async fn detect_platforms() -> Vec<PlatformKind> {
    let mut found = Vec::new();
    for kind in PlatformKind::ALL {
        if platform_present(kind).await {
            found.push(kind);
        }
    }
    found
}

/// Whether the platform's directory exists in the current project.
///
/// Unreadable paths count as absent, matching how the generator treats any
/// platform it cannot reach: skip it rather than fail the run.
pub async fn platform_present(kind: PlatformKind) -> bool {
    tokio::fs::try_exists(kind.detection_path())
        .await
        .unwrap_or(false)
}

/// Reads the project display name from the config manifest.
///
/// The name is the text of the first `<name>` element sitting directly under
/// the `<widget>` root, trimmed of surrounding whitespace. iOS and macOS use
/// it to locate the Xcode project directory under `platforms/`.
///
/// # Errors
///
/// [`Error::MissingManifest`] when the file does not exist,
/// [`Error::ManifestParse`] when it is not well-formed XML rooted at
/// `<widget>`, and [`Error::ManifestFieldMissing`] when no `<name>` child is
/// present.
pub async fn project_name(config_file: &Path) -> Result<String> {
    let xml = match tokio::fs::read_to_string(config_file).await {
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Err(Error::MissingManifest {
                path: config_file.to_path_buf(),
            });
        }
        other => other.fs_context("reading config manifest", config_file)?,
    };

    match extract_name(&xml) {
        Ok(Some(name)) => Ok(name),
        Ok(None) => Err(Error::ManifestFieldMissing {
            path: config_file.to_path_buf(),
        }),
        Err(detail) => Err(Error::ManifestParse {
            path: config_file.to_path_buf(),
            detail,
        }),
    }
}

/// Pulls the first root-level `<name>` text out of a manifest document.
///
/// `Ok(None)` means the document is fine but carries no name. Nested `<name>`
/// elements further down the tree, such as localized platform overrides, are
/// ignored.
fn extract_name(xml: &str) -> std::result::Result<Option<String>, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut text: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if !saw_root {
                    if e.name().as_ref() != b"widget" {
                        return Err("root element must be <widget>".into());
                    }
                    saw_root = true;
                } else if depth == 1 && text.is_none() && e.name().as_ref() == b"name" {
                    text = Some(String::new());
                }
                depth += 1;
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                if depth == 1 {
                    if let Some(collected) = text.take() {
                        return Ok(Some(collected.trim().to_string()));
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if !saw_root {
                    if e.name().as_ref() != b"widget" {
                        return Err("root element must be <widget>".into());
                    }
                    return Ok(None);
                }
                if depth == 1 && text.is_none() && e.name().as_ref() == b"name" {
                    return Ok(Some(String::new()));
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(collected) = text.as_mut() {
                    collected.push_str(&e.unescape().map_err(|err| format!("{err}"))?);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(collected) = text.as_mut() {
                    collected.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::Eof) => return Ok(None),
            Ok(_) => {}
            Err(e) => return Err(format!("{e}")),
        }
        buf.clear();
    }
}
