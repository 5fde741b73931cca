use gdk_pixbuf::{InterpType, Pixbuf};
use log::debug;
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::model::{Dimensions, ImageId};

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: glib::Error,
    },
    #[error("failed to scale {} to {}x{}", .path.display(), .size.width, .size.height)]
    Scale { path: PathBuf, size: Dimensions },
}

/// Every image the board draws, decoded once at startup and sized to one cell.
pub struct ImageSet {
    images: HashMap<ImageId, Pixbuf>,
}

impl ImageSet {
    pub fn load(asset_dir: &Path, cell: Dimensions) -> Result<Self, AssetError> {
        let mut images = HashMap::new();
        for id in ImageId::all() {
            let path = asset_dir.join(id.file_name());
            let pixbuf = Self::load_scaled(&path, cell)?;
            images.insert(id, pixbuf);
        }
        debug!(target: "image_set", "Loaded {} images from {}", images.len(), asset_dir.display());
        Ok(Self { images })
    }

    fn load_scaled(path: &Path, cell: Dimensions) -> Result<Pixbuf, AssetError> {
        let pixbuf = Pixbuf::from_file(path).map_err(|source| AssetError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        if pixbuf.width() == cell.width && pixbuf.height() == cell.height {
            return Ok(pixbuf);
        }
        pixbuf
            .scale_simple(cell.width, cell.height, InterpType::Bilinear)
            .ok_or_else(|| AssetError::Scale {
                path: path.to_path_buf(),
                size: cell,
            })
    }

    pub fn get(&self, id: ImageId) -> Option<&Pixbuf> {
        self.images.get(&id)
    }
}

impl Debug for ImageSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ImageSet({} images)", self.images.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_shipped_assets_at_cell_size() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let image_set = ImageSet::load(
            &dir,
            Dimensions {
                width: 100,
                height: 100,
            },
        )
        .expect("shipped assets load");

        assert_eq!(image_set.images.len(), 9);
        for id in ImageId::all() {
            let pixbuf = image_set.get(id).expect("every catalog image is loaded");
            assert_eq!((pixbuf.width(), pixbuf.height()), (100, 100), "{}", id);
        }
    }

    #[test]
    fn test_assets_are_scaled_to_the_cell() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let image_set = ImageSet::load(
            &dir,
            Dimensions {
                width: 50,
                height: 40,
            },
        )
        .expect("shipped assets load");

        let hidden = image_set.get(ImageId::HIDDEN).expect("hidden image");
        assert_eq!((hidden.width(), hidden.height()), (50, 40));
    }

    #[test]
    fn test_missing_hidden_image_is_fatal() {
        let dir = std::env::temp_dir().join("memory-no-such-asset-dir");
        let result = ImageSet::load(
            &dir,
            Dimensions {
                width: 100,
                height: 100,
            },
        );

        match result {
            Err(AssetError::Load { path, .. }) => {
                assert_eq!(path, dir.join("image0.bmp"));
            }
            other => panic!("expected a load error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_message_names_the_file() {
        let dir = std::env::temp_dir().join("memory-no-such-asset-dir");
        let err = ImageSet::load(
            &dir,
            Dimensions {
                width: 100,
                height: 100,
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("image0.bmp"));
    }
}
