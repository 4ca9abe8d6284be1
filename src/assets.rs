//! Image asset loading
//!
//! Images are decoded once on the CPU into RGBA [`Surface`]s. Uploading them
//! to the GPU is left to the renderer, which caches one texture per surface
//! key for as long as its window lives.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::imageops::FilterType;
use thiserror::Error;

use crate::app::config::AssetConfig;

/// Errors raised while loading an image asset
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset '{name}' not found at {}", path.display())]
    NotFound { name: String, path: PathBuf },

    #[error("failed to decode asset '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("asset '{name}' has invalid target size {width}x{height}")]
    InvalidSize {
        name: String,
        width: u32,
        height: u32,
    },
}

/// Decoded RGBA image ready to be drawn
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    key: String,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Creates a surface from raw RGBA8 pixels
    ///
    /// # Panics
    /// Panics if `pixels` is not exactly `width * height * 4` bytes long.
    pub fn from_rgba(key: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self {
            key: key.into(),
            width,
            height,
            pixels,
        }
    }

    /// Unique key identifying this image and its scale
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("key", &self.key)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Anything that can produce image surfaces by logical name
pub trait AssetSource {
    /// Loads `name`, rescaling it to `size` when given
    fn load(&self, name: &str, size: Option<(u32, u32)>) -> Result<Surface, AssetError>;

    /// Loads `name` and logs a warning instead of failing
    fn load_or_warn(&self, name: &str, size: Option<(u32, u32)>) -> Option<Arc<Surface>> {
        match self.load(name, size) {
            Ok(surface) => Some(Arc::new(surface)),
            Err(e) => {
                tracing::warn!(asset = name, error = %e, "Could not load image");
                None
            }
        }
    }
}

/// Loads images from an assets directory on disk
#[derive(Debug, Clone)]
pub struct AssetService {
    root: PathBuf,
}

impl AssetService {
    /// Creates a service reading from `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a service from configuration
    ///
    /// Relative directories are resolved next to the executable first, then
    /// against the current directory.
    pub fn from_config(config: &AssetConfig) -> Self {
        Self::new(Self::resolve_dir(&config.dir))
    }

    fn resolve_dir(dir: &Path) -> PathBuf {
        if dir.is_absolute() {
            return dir.to_path_buf();
        }

        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let candidate = exe_dir.join(dir);
            if candidate.exists() {
                return candidate;
            }
        }

        dir.to_path_buf()
    }

    /// Directory images are read from
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for AssetService {
    fn load(&self, name: &str, size: Option<(u32, u32)>) -> Result<Surface, AssetError> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(AssetError::NotFound {
                name: name.to_string(),
                path,
            });
        }

        let image = image::open(&path).map_err(|source| AssetError::Decode {
            name: name.to_string(),
            source,
        })?;

        let (image, key) = match size {
            Some((width, height)) if width == 0 || height == 0 => {
                return Err(AssetError::InvalidSize {
                    name: name.to_string(),
                    width,
                    height,
                });
            }
            Some((width, height)) => (
                image.resize_exact(width, height, FilterType::Triangle),
                format!("{name}@{width}x{height}"),
            ),
            None => (image, name.to_string()),
        };

        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();
        tracing::debug!(asset = name, width, height, "Loaded image");

        Ok(Surface::from_rgba(key, width, height, rgba.into_raw()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        let img = RgbaImage::from_pixel(width, height, Rgba([0, 166, 160, 255]));
        img.save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_load_keeps_native_size() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "icon.png", 16, 8);

        let service = AssetService::new(dir.path());
        let surface = service.load("icon.png", None).unwrap();

        assert_eq!(surface.size(), [16, 8]);
        assert_eq!(surface.pixels().len(), 16 * 8 * 4);
        assert_eq!(surface.key(), "icon.png");
    }

    #[test]
    fn test_load_rescales() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "logo.png", 40, 15);

        let service = AssetService::new(dir.path());
        let surface = service.load("logo.png", Some((400, 150))).unwrap();

        assert_eq!(surface.width(), 400);
        assert_eq!(surface.height(), 150);
        assert_eq!(surface.key(), "logo.png@400x150");
    }

    #[test]
    fn test_missing_asset() {
        let dir = tempfile::tempdir().unwrap();
        let service = AssetService::new(dir.path());

        let err = service.load("nope.png", None).unwrap_err();
        assert!(matches!(err, AssetError::NotFound { .. }));
        assert!(service.load_or_warn("nope.png", None).is_none());
    }

    #[test]
    fn test_corrupt_asset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not an image").unwrap();

        let service = AssetService::new(dir.path());
        let err = service.load("broken.png", Some((80, 80))).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn test_zero_target_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "icon.png", 4, 4);

        let service = AssetService::new(dir.path());
        let err = service.load("icon.png", Some((0, 80))).unwrap_err();
        assert!(matches!(err, AssetError::InvalidSize { .. }));
    }
}
