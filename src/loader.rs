use image::GenericImageView;
use std::path::Path;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Decoded image data (CPU side, ready to blit)
// ---------------------------------------------------------------------------

pub struct DecodedImage {
    pub rgba_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub fn load(path: &Path) -> Result<DecodedImage> {
    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let (width, height) = img.dimensions();
    Ok(DecodedImage {
        rgba_bytes: img.to_rgba8().into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn decodes_png_to_rgba() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dot.png");
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let dec = load(&path).unwrap();
        assert_eq!((dec.width, dec.height), (3, 2));
        assert_eq!(dec.rgba_bytes.len(), 3 * 2 * 4);
        assert_eq!(&dec.rgba_bytes[20..24], &[10, 20, 30, 255]);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();
        assert!(matches!(load(&path), Err(Error::Decode { .. })));
    }
}
