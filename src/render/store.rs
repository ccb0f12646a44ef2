//! Image lookup by asset key.

use std::fmt;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

/// Where an asset lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageCategory {
    Mana,
    Texture,
    Frame,
    Card,
}

impl ImageCategory {
    pub const ALL: [ImageCategory; 4] = [
        ImageCategory::Mana,
        ImageCategory::Texture,
        ImageCategory::Frame,
        ImageCategory::Card,
    ];

    /// Directory name under an [`FsImageStore`] root.
    pub fn dir_name(self) -> &'static str {
        match self {
            ImageCategory::Mana => "mana",
            ImageCategory::Texture => "textures",
            ImageCategory::Frame => "frames",
            ImageCategory::Card => "cards",
        }
    }
}

impl fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageCategory::Mana => "mana",
            ImageCategory::Texture => "texture",
            ImageCategory::Frame => "frame",
            ImageCategory::Card => "card art",
        };
        f.write_str(name)
    }
}

/// Loads decoded images by key.
pub trait ImageStore {
    /// `None` when the asset does not exist or cannot be decoded.
    fn load(&self, key: &str, category: ImageCategory) -> Option<RgbaImage>;

    /// Like [`load`](Self::load), but a missing asset is an error.
    fn fetch(&self, key: &str, category: ImageCategory) -> Result<RgbaImage> {
        self.load(key, category).ok_or_else(|| CardError::AssetNotFound {
            key: key.to_string(),
            category: category.to_string(),
        })
    }
}

/// PNG files laid out as `<root>/<category dir>/<key>.png`.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str, category: ImageCategory) -> PathBuf {
        self.root
            .join(category.dir_name())
            .join(format!("{}.png", key))
    }
}

impl ImageStore for FsImageStore {
    fn load(&self, key: &str, category: ImageCategory) -> Option<RgbaImage> {
        let path = self.path_for(key, category);
        if !path.is_file() {
            log::debug!("no {} image for {} at {}", category, key, path.display());
            return None;
        }

        match image::open(&path) {
            Ok(img) => Some(img.to_rgba8()),
            Err(e) => {
                log::warn!("failed to decode {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    #[test]
    fn test_path_layout() {
        let store = FsImageStore::new("/assets");
        assert_eq!(
            store.path_for("MANA_G", ImageCategory::Mana),
            PathBuf::from("/assets/mana/MANA_G.png")
        );
        assert_eq!(
            store.path_for("G_BASIC_LAND", ImageCategory::Frame),
            PathBuf::from("/assets/frames/G_BASIC_LAND.png")
        );
    }

    #[test]
    fn test_load_png() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("mana")).unwrap();
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 128, 0, 255]));
        img.save(temp.path().join("mana/MANA_G.png")).unwrap();

        let store = FsImageStore::new(temp.path());
        let loaded = store.load("MANA_G", ImageCategory::Mana).unwrap();
        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(loaded.get_pixel(0, 0), &Rgba([0, 128, 0, 255]));

        assert!(store.load("MANA_G", ImageCategory::Texture).is_none());
    }

    #[test]
    fn test_undecodable_file_is_missing() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("cards")).unwrap();
        std::fs::write(temp.path().join("cards/A1.png"), b"not a png").unwrap();

        let store = FsImageStore::new(temp.path());
        assert!(store.load("A1", ImageCategory::Card).is_none());
    }

    #[test]
    fn test_fetch_missing_is_asset_not_found() {
        let temp = TempDir::new().unwrap();
        let store = FsImageStore::new(temp.path());

        let err = store.fetch("MANA_G", ImageCategory::Mana).unwrap_err();
        assert!(matches!(err, CardError::AssetNotFound { ref key, .. } if key == "MANA_G"));
        assert_eq!(err.to_string(), "Asset not found: MANA_G (mana)");
    }
}
