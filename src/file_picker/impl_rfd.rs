use crate::file_picker::interface::{FilePicker, IMAGE_EXTENSIONS};
use crate::library::logger::interface::Logger;
use rfd::FileDialog;
use std::path::PathBuf;
use std::sync::Arc;

pub struct FilePickerRfd {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FilePickerRfd {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("file_picker"),
        }
    }
}

impl FilePicker for FilePickerRfd {
    fn pick_image(&self) -> Option<PathBuf> {
        let picked = FileDialog::new()
            .set_title("Upload Image")
            .add_filter("Image", &IMAGE_EXTENSIONS)
            .pick_file();

        match &picked {
            Some(path) => {
                let _ = self.logger.info(&format!("Picked {}", path.display()));
            }
            None => {
                let _ = self.logger.debug("File dialog cancelled");
            }
        }

        picked
    }
}
