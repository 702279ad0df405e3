//! Figure Resolver Module
//! Locates pre-rendered PNG figures and decodes them for display.

use crate::error::DashboardError;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A figure name joined onto the figures directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFigure {
    pub file: String,
    pub path: PathBuf,
    pub exists: bool,
}

impl ResolvedFigure {
    /// Text shown in place of a figure that has not been produced.
    pub fn placeholder(&self) -> String {
        format!("`{}` not generated yet (run the notebook).", self.file)
    }
}

/// Resolves logical figure names under a fixed directory. Never fails.
#[derive(Debug, Clone)]
pub struct FigureResolver {
    dir: PathBuf,
}

impl FigureResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn resolve(&self, file: &str) -> ResolvedFigure {
        let path = self.dir.join(file);
        let exists = path.is_file();
        if !exists {
            debug!("Figure {} not found at {}", file, path.display());
        }
        ResolvedFigure {
            file: file.to_string(),
            path,
            exists,
        }
    }
}

/// Decode a PNG into an egui image.
pub fn decode_figure(figure: &ResolvedFigure) -> Result<egui::ColorImage, DashboardError> {
    if !figure.exists {
        return Err(DashboardError::asset_missing(&figure.file));
    }

    let rgba = image::open(&figure.path)
        .map_err(|e| {
            warn!("Failed to decode {}: {}", figure.path.display(), e);
            DashboardError::asset_missing(&figure.file)
        })?
        .to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Uploaded figure textures, one per path. Figures that failed to decode
/// are remembered too so they are not re-read every frame.
#[derive(Default)]
pub struct FigureTextures {
    textures: HashMap<PathBuf, Option<egui::TextureHandle>>,
}

impl FigureTextures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the texture for a figure, decoding and uploading it on first use.
    pub fn get(
        &mut self,
        ctx: &egui::Context,
        figure: &ResolvedFigure,
    ) -> Result<egui::TextureHandle, DashboardError> {
        let entry = self
            .textures
            .entry(figure.path.clone())
            .or_insert_with(|| {
                decode_figure(figure).ok().map(|image| {
                    ctx.load_texture(figure.file.clone(), image, egui::TextureOptions::LINEAR)
                })
            });
        entry
            .clone()
            .ok_or_else(|| DashboardError::asset_missing(&figure.file))
    }

    /// Drop every texture, e.g. after figures were regenerated.
    pub fn clear(&mut self) {
        self.textures.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn absent_figure_reports_false() {
        let td = tempdir().unwrap();
        let resolver = FigureResolver::new(td.path());
        let figure = resolver.resolve("top_vendors.png");
        assert!(!figure.exists);
        assert_eq!(figure.path, td.path().join("top_vendors.png"));
        assert_eq!(
            figure.placeholder(),
            "`top_vendors.png` not generated yet (run the notebook)."
        );
    }

    #[test]
    fn decode_missing_is_asset_missing() {
        let resolver = FigureResolver::new("/nonexistent/figures");
        let err = decode_figure(&resolver.resolve("x.png")).unwrap_err();
        assert!(matches!(err, DashboardError::AssetMissing { ref file } if file == "x.png"));
    }

    #[test]
    fn decode_existing_png() {
        let td = tempdir().unwrap();
        let img = image::RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]));
        img.save(td.path().join("trend_by_year.png")).unwrap();

        let figure = FigureResolver::new(td.path()).resolve("trend_by_year.png");
        assert!(figure.exists);
        let decoded = decode_figure(&figure).unwrap();
        assert_eq!(decoded.size, [4, 3]);
    }

    #[test]
    fn garbage_file_is_asset_missing() {
        let td = tempdir().unwrap();
        std::fs::write(td.path().join("broken.png"), b"not a png").unwrap();
        let figure = FigureResolver::new(td.path()).resolve("broken.png");
        assert!(figure.exists);
        assert!(decode_figure(&figure).is_err());
    }

    #[test]
    fn undecodable_texture_is_asset_missing_every_frame() {
        let td = tempdir().unwrap();
        std::fs::write(td.path().join("sb_top_vendors.png"), b"not a png").unwrap();
        let figure = FigureResolver::new(td.path()).resolve("sb_top_vendors.png");

        let ctx = egui::Context::default();
        let mut textures = FigureTextures::new();
        for _ in 0..2 {
            let err = textures.get(&ctx, &figure).err().expect("expected Err");
            assert!(matches!(err, DashboardError::AssetMissing { ref file } if file == "sb_top_vendors.png"));
        }
    }
}
