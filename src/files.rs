use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Error, Result};
use crate::resolver::Directory;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Eligible image files directly inside `dir`, sorted. Subdirectories are not entered.
pub fn list_images(dir: &Directory) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in dir.entries()?.filter_map(|e| e.ok()) {
        let p = entry.path();
        if p.is_file() && is_image_file(&p) {
            files.push(p);
        }
    }
    files.sort();
    Ok(files)
}

// ---------------------------------------------------------------------------
// Shuffled sequence
// ---------------------------------------------------------------------------

/// The images of one directory in random order. Never empty, never changes.
#[derive(Debug)]
pub struct ImageSequence {
    files: Vec<PathBuf>,
}

impl ImageSequence {
    pub fn shuffled<R: Rng + ?Sized>(dir: &Directory, rng: &mut R) -> Result<Self> {
        let mut files = list_images(dir)?;
        if files.is_empty() {
            return Err(Error::EmptyDirectory(dir.path().to_path_buf()));
        }
        files.shuffle(rng);
        log::info!("Shuffled {} images from {:?}", files.len(), dir.path());
        Ok(Self { files })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn get(&self, idx: usize) -> Option<&Path> {
        self.files.get(idx).map(PathBuf::as_path)
    }
}
