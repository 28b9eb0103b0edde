use crate::file_picker::interface::FilePicker;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct FilePickerFake {
    path: Option<PathBuf>,
    calls: AtomicUsize,
}

impl FilePickerFake {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FilePicker for FilePickerFake {
    fn pick_image(&self) -> Option<PathBuf> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.path.clone()
    }
}
