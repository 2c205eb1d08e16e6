use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to load background {}: {source}", .path.display())]
    Background {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("background {} is {width}x{height}, device limit is {limit}", .path.display())]
    BackgroundTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        limit: u32,
    },
}

/// Decoded background image, RGBA8, top row first.
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl BackgroundImage {
    pub fn open(path: &Path) -> Result<Self, RenderError> {
        let decoded = image::open(path).map_err(|source| RenderError::Background {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        tracing::info!("background loaded: {} ({width}x{height})", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    /// Reject images the device cannot hold in a single 2D texture.
    pub fn check_limit(&self, limit: u32) -> Result<(), RenderError> {
        if self.width > limit || self.height > limit {
            return Err(RenderError::BackgroundTooLarge {
                path: self.path.clone(),
                width: self.width,
                height: self.height,
                limit,
            });
        }
        Ok(())
    }
}
