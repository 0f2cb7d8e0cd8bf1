use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Directory not found: {0}")]
    NotFound(String),

    #[error("Directory contains no suitable images: {}", .0.display())]
    EmptyDirectory(PathBuf),

    #[error("Invalid image dimensions {width}x{height}")]
    InvalidImage { width: f64, height: f64 },

    #[error("Could not load {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

pub type Result<T> = std::result::Result<T, Error>;
