//! Icon rendering: one task per output file.

pub mod backend;

use std::path::PathBuf;

use crate::cli::OutputManager;
use crate::error::{ErrorExt, Result};
use crate::platform::IconSpec;

/// A single file to generate: which icon, from which source, to where.
#[derive(Clone, Debug)]
pub struct GenerationTask {
    /// Catalog entry being rendered.
    pub icon: IconSpec,
    /// Source image the icon is cut from.
    pub source: PathBuf,
    /// Absolute or project-relative output path.
    pub dest: PathBuf,
}

/// Renders one icon to disk, reporting progress on `output`.
///
/// Square icons are a single resize. Wide icons resize first and then crop
/// from the original source, so the crop is always the final write. Parent
/// directories are created on demand; Android density folders do not exist
/// until their first icon lands.
pub async fn generate(task: GenerationTask, output: OutputManager) -> Result<()> {
    if let Some(parent) = task.dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .fs_context("creating icon directory", parent)?;
    }

    let size = task.icon.size;
    backend::resize(&task.source, &task.dest, size, size).await?;
    output.success(&format!("{} created", task.icon.name));

    if let Some(height) = task.icon.height {
        backend::crop(&task.source, &task.dest, size, height).await?;
        output.success(&format!("{} cropped", task.icon.name));
    }

    Ok(())
}
