use std::path::PathBuf;

pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff"];

pub trait FilePicker {
    /// Returns `None` when the user cancels.
    fn pick_image(&self) -> Option<PathBuf>;
}
