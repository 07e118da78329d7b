//! Image decode, scale and encode primitives.
//!
//! Decoding and scaling are CPU-bound, so both run inside
//! [`tokio::task::spawn_blocking`]; only the final file write happens on the
//! async runtime. Output is always RGBA PNG at maximum compression with
//! adaptive filtering, whatever the source format was.

use std::path::Path;

use image::DynamicImage;
use image::ImageEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;

use crate::error::{Error, Result};

/// Scales the source image to exactly `width` by `height` and writes it to
/// `dest`.
///
/// The aspect ratio of the source is not preserved; catalog dimensions win.
pub async fn resize(src: &Path, dest: &Path, width: u32, height: u32) -> Result<()> {
    log::debug!(
        "resize {} -> {} ({width}x{height})",
        src.display(),
        dest.display()
    );
    run_backend(src, dest, move |img| {
        img.resize_exact(width, height, FilterType::Lanczos3)
    })
    .await
}

/// Scales the source to cover `width` by `height`, centre-crops the overflow
/// and writes the result to `dest`.
///
/// Reads from the original source, so running it after [`resize`] on the same
/// destination replaces the stretched intermediate with a proper crop.
pub async fn crop(src: &Path, dest: &Path, width: u32, height: u32) -> Result<()> {
    log::debug!(
        "crop {} -> {} ({width}x{height})",
        src.display(),
        dest.display()
    );
    run_backend(src, dest, move |img| {
        img.resize_to_fill(width, height, FilterType::Lanczos3)
    })
    .await
}

/// Runs `op` over the decoded source on the blocking pool, then writes the
/// encoded PNG to `dest`.
async fn run_backend<F>(src: &Path, dest: &Path, op: F) -> Result<()>
where
    F: FnOnce(DynamicImage) -> DynamicImage + Send + 'static,
{
    let render_error = |detail: String| Error::Render {
        src: src.to_path_buf(),
        dest: dest.to_path_buf(),
        detail,
    };

    let source = src.to_path_buf();
    let encoded = tokio::task::spawn_blocking(move || -> std::result::Result<Vec<u8>, String> {
        let img = image::open(&source).map_err(|e| format!("decoding source: {e}"))?;
        let rgba = op(img).to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut png = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut png, CompressionType::Best, PngFilterType::Adaptive);
        encoder
            .write_image(rgba.as_raw(), width, height, image::ExtendedColorType::Rgba8)
            .map_err(|e| format!("encoding output: {e}"))?;
        Ok(png)
    })
    .await
    .map_err(|e| Error::TaskFailed(format!("image task panicked: {e}")))?
    .map_err(render_error)?;

    tokio::fs::write(dest, &encoded)
        .await
        .map_err(|e| render_error(format!("writing output: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{Rgba, RgbaImage};

    fn solid_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
            .save(path)
            .unwrap();
    }

    #[tokio::test]
    async fn resize_produces_exact_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("icon.png");
        let dest = dir.path().join("icon-17.png");
        solid_png(&src, 64, 64);

        resize(&src, &dest, 17, 17).await.unwrap();
        assert_eq!(image::image_dimensions(&dest).unwrap(), (17, 17));
    }

    #[tokio::test]
    async fn crop_covers_wide_targets() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("icon.png");
        let dest = dir.path().join("tile.png");
        solid_png(&src, 64, 64);

        crop(&src, &dest, 31, 15).await.unwrap();
        assert_eq!(image::image_dimensions(&dest).unwrap(), (31, 15));
    }

    #[tokio::test]
    async fn corrupt_source_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("icon.png");
        let dest = dir.path().join("out.png");
        tokio::fs::write(&src, b"definitely not a png").await.unwrap();

        let err = resize(&src, &dest, 10, 10).await.unwrap_err();
        assert!(matches!(err, Error::Render { .. }));
        assert!(!tokio::fs::try_exists(&dest).await.unwrap());
    }

    #[tokio::test]
    async fn existing_output_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("icon.png");
        let dest = dir.path().join("out.png");
        solid_png(&src, 64, 64);
        tokio::fs::write(&dest, b"stale").await.unwrap();

        resize(&src, &dest, 12, 12).await.unwrap();
        assert_eq!(image::image_dimensions(&dest).unwrap(), (12, 12));
    }
}
