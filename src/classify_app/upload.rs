use image::DynamicImage;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to decode image {path}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// A decoded, displayable image together with the upload that produced it.
#[derive(Clone)]
pub struct Upload {
    pub id: u64,
    pub path: PathBuf,
    pub image: Arc<DynamicImage>,
}

impl Upload {
    pub fn decode(id: u64, path: &Path) -> Result<Self, DecodeError> {
        let read_error = |source: std::io::Error| DecodeError::Read {
            path: path.to_path_buf(),
            source,
        };
        // Format comes from the file contents, not its extension.
        let image = image::ImageReader::open(path)
            .map_err(read_error)?
            .with_guessed_format()
            .map_err(read_error)?
            .decode()
            .map_err(|source| DecodeError::Image {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            id,
            path: path.to_path_buf(),
            image: Arc::new(image),
        })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl fmt::Debug for Upload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upload")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}
