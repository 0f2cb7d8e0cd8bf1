use std::path::Path;

use crate::error::Result;
use crate::files::ImageSequence;
use crate::fit::fit;
use crate::navigation::Cursor;

/// Screen area available to the viewer, read once from the display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Width of one navigation strip. One strip sits on each side of the image.
    pub nav_width: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, nav_width: f64) -> Self {
        Self { width, height, nav_width }
    }

    pub fn fit_width(&self) -> f64 {
        (self.width - 2.0 * self.nav_width).max(0.0)
    }

    pub fn fit_height(&self) -> f64 {
        self.height
    }
}

/// Everything one viewing session needs. Owned by the UI shell.
pub struct Session {
    images: ImageSequence,
    cursor: Cursor,
    viewport: Viewport,
}

impl Session {
    pub fn new(images: ImageSequence, viewport: Viewport) -> Self {
        let cursor = Cursor::new(images.len());
        Self { images, cursor, viewport }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.images.get(self.cursor.position())
    }

    pub fn advance(&mut self) -> bool {
        self.cursor.advance()
    }

    pub fn retreat(&mut self) -> bool {
        self.cursor.retreat()
    }

    /// On-screen size of an `image_w` x `image_h` image in this session's viewport.
    pub fn display_size(&self, image_w: u32, image_h: u32) -> Result<(f64, f64)> {
        let size = fit(
            image_w as f64,
            image_h as f64,
            self.viewport.fit_width(),
            self.viewport.fit_height(),
        )?;
        log::debug!("[fit] {}x{} -> {:.1}x{:.1}", image_w, image_h, size.0, size.1);
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::resolver::Directory;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::TempDir;

    fn session(n: usize, viewport: Viewport) -> (TempDir, Session) {
        let tmp = TempDir::new().unwrap();
        for i in 0..n {
            fs::write(tmp.path().join(format!("{}.png", i)), b"").unwrap();
        }
        let dir = Directory::new(tmp.path().to_path_buf());
        let images = ImageSequence::shuffled(&dir, &mut StdRng::seed_from_u64(3)).unwrap();
        (tmp, Session::new(images, viewport))
    }

    #[test]
    fn margin_is_reserved_on_both_sides() {
        let v = Viewport::new(1920.0, 1080.0, 40.0);
        assert_eq!(v.fit_width(), 1840.0);
        assert_eq!(v.fit_height(), 1080.0);
        assert_eq!(Viewport::new(50.0, 10.0, 40.0).fit_width(), 0.0);
    }

    #[test]
    fn display_size_uses_fit_area() {
        let (_tmp, s) = session(1, Viewport::new(1080.0, 1000.0, 40.0));
        assert_eq!(s.display_size(800, 600).unwrap(), (1000.0, 750.0));
        assert!(matches!(s.display_size(0, 10), Err(Error::InvalidImage { .. })));
    }

    #[test]
    fn navigation_walks_every_image_once() {
        let (_tmp, mut s) = session(4, Viewport::new(800.0, 600.0, 40.0));
        let mut seen = vec![s.current_path().unwrap().to_path_buf()];
        while s.advance() {
            seen.push(s.current_path().unwrap().to_path_buf());
        }
        assert_eq!(s.position(), s.len() - 1);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4);

        while s.retreat() {}
        assert_eq!(s.position(), 0);
    }
}
