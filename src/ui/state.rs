use crate::loader::{self, DecodedImage};
use crate::session::Session;
use crate::ui::render::{
    blit_scaled, draw_chevron, fill_rect, rgb, Direction, BG_COLOR, CHEVRON_COLOR, ERROR_COLOR,
    NAV_COLOR,
};

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// What is on screen for the session's current image.
pub enum Shown {
    Image {
        decoded: DecodedImage,
        display_w: f64,
        display_h: f64,
    },
    Failed(String),
}

pub struct ViewerState {
    pub session: Session,
    pub shown: Shown,
    pub mouse_pos: (f64, f64),
}

impl ViewerState {
    pub fn new(session: Session) -> Self {
        let shown = show(&session);
        Self {
            session,
            shown,
            mouse_pos: (0.0, 0.0),
        }
    }

    pub fn next_image(&mut self) -> bool {
        if !self.session.advance() {
            return false;
        }
        self.reload("next");
        true
    }

    pub fn previous_image(&mut self) -> bool {
        if !self.session.retreat() {
            return false;
        }
        self.reload("previous");
        true
    }

    fn reload(&mut self, how: &str) {
        log::debug!(
            "[nav] {} -> {}/{}",
            how,
            self.session.position() + 1,
            self.session.len()
        );
        self.shown = show(&self.session);
    }

    /// Window title: position, file name, and the load error if there was one.
    pub fn title(&self) -> String {
        let name = self
            .session
            .current_path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let pos = format!("[{}/{}]", self.session.position() + 1, self.session.len());
        match &self.shown {
            Shown::Image { .. } => format!("Randomizer {} {}", pos, name),
            Shown::Failed(err) => format!("Randomizer {} {}", pos, err),
        }
    }

    /// Left clicks on the navigation strips. Returns true if the image changed.
    pub fn click(&mut self) -> bool {
        let (nav_w, view_w) = {
            let viewport = self.session.viewport();
            (viewport.nav_width, viewport.width)
        };
        let x = self.mouse_pos.0;
        if x < nav_w {
            self.previous_image()
        } else if x >= view_w - nav_w {
            self.next_image()
        } else {
            false
        }
    }

    /// Render into the softbuffer framebuffer (u32 per pixel, 0x00RRGGBB).
    ///
    /// Layout follows the viewport the image was fitted against, so a frame of
    /// another size never rescales or recentres the image.
    pub fn render(&self, frame: &mut [u32], fb_w: u32, fb_h: u32) {
        let bg = rgb(BG_COLOR[0], BG_COLOR[1], BG_COLOR[2]);
        frame.fill(bg);

        let viewport = self.session.viewport();
        let nav_w = viewport.nav_width.round() as u32;
        let view_w = viewport.width.round() as u32;
        let view_h = viewport.fit_height().round() as u32;
        let area_w = viewport.fit_width() as f32;
        let sh = view_h as f32;

        match &self.shown {
            Shown::Image { decoded, display_w, display_h } => {
                let draw_w = *display_w as f32;
                let draw_h = *display_h as f32;
                let x0 = nav_w as f32 + (area_w - draw_w) / 2.0;
                let y0 = (sh - draw_h) / 2.0;
                blit_scaled(
                    frame, fb_w, fb_h,
                    &decoded.rgba_bytes, decoded.width, decoded.height,
                    x0, y0,
                    draw_w / decoded.width as f32,
                    draw_h / decoded.height as f32,
                );
            }
            Shown::Failed(_) => {
                let pw = (area_w / 3.0) as u32;
                let ph = view_h / 6;
                let px = nav_w as i32 + (area_w as i32 - pw as i32) / 2;
                let py = (view_h as i32 - ph as i32) / 2;
                fill_rect(frame, fb_w, fb_h, px, py, pw, ph, ERROR_COLOR);
            }
        }

        // Navigation strips
        let chevron = (nav_w / 2).max(6);
        let thickness = (nav_w / 10).max(2);
        let mid_y = view_h as i32 / 2;
        let right_x = view_w.saturating_sub(nav_w) as i32;
        fill_rect(frame, fb_w, fb_h, 0, 0, nav_w, view_h, NAV_COLOR);
        fill_rect(frame, fb_w, fb_h, right_x, 0, nav_w, view_h, NAV_COLOR);
        draw_chevron(
            frame, fb_w, fb_h,
            nav_w as i32 / 2, mid_y, chevron, thickness,
            Direction::Left, CHEVRON_COLOR,
        );
        draw_chevron(
            frame, fb_w, fb_h,
            right_x + nav_w as i32 / 2, mid_y, chevron, thickness,
            Direction::Right, CHEVRON_COLOR,
        );
    }
}

/// Decode the session's current image and fit it to the viewport.
fn show(session: &Session) -> Shown {
    let Some(path) = session.current_path() else {
        return Shown::Failed("no image at cursor".to_string());
    };
    let result = loader::load(path).and_then(|decoded| {
        let (display_w, display_h) = session.display_size(decoded.width, decoded.height)?;
        Ok(Shown::Image { decoded, display_w, display_h })
    });
    match result {
        Ok(shown) => shown,
        Err(e) => {
            log::error!("{}", e);
            Shown::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::ImageSequence;
    use crate::resolver::Directory;
    use crate::session::Viewport;
    use image::{Rgba, RgbaImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn viewer(names: &[&str]) -> (TempDir, ViewerState) {
        let tmp = TempDir::new().unwrap();
        for name in names {
            RgbaImage::from_pixel(8, 4, Rgba([200, 0, 0, 255]))
                .save(tmp.path().join(name))
                .unwrap();
        }
        let dir = Directory::new(tmp.path().to_path_buf());
        let images = ImageSequence::shuffled(&dir, &mut StdRng::seed_from_u64(5)).unwrap();
        let session = Session::new(images, Viewport::new(180.0, 100.0, 10.0));
        (tmp, ViewerState::new(session))
    }

    #[test]
    fn first_image_is_fitted() {
        let (_tmp, v) = viewer(&["a.png"]);
        match &v.shown {
            Shown::Image { display_w, display_h, .. } => {
                assert_eq!((*display_w, *display_h), (160.0, 80.0));
            }
            Shown::Failed(msg) => panic!("unexpected failure: {msg}"),
        }
    }

    #[test]
    fn clicks_on_strips_navigate() {
        let (_tmp, mut v) = viewer(&["a.png", "b.png", "c.png"]);
        v.mouse_pos = (5.0, 50.0);
        assert!(!v.click());
        v.mouse_pos = (175.0, 50.0);
        assert!(v.click());
        assert!(v.click());
        assert!(!v.click());
        assert_eq!(v.session.position(), 2);
        v.mouse_pos = (90.0, 50.0);
        assert!(!v.click());
        v.mouse_pos = (0.0, 0.0);
        assert!(v.click());
        assert_eq!(v.session.position(), 1);
        assert!(v.title().starts_with("Randomizer [2/3] "));
    }

    #[test]
    fn broken_file_does_not_stop_navigation() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("bad.jpg"), b"nope").unwrap();
        RgbaImage::new(2, 2).save(tmp.path().join("good.png")).unwrap();
        let dir = Directory::new(tmp.path().to_path_buf());
        let images = ImageSequence::shuffled(&dir, &mut StdRng::seed_from_u64(1)).unwrap();
        let mut v = ViewerState::new(Session::new(images, Viewport::new(100.0, 100.0, 10.0)));

        let mut failures = 0;
        loop {
            if matches!(v.shown, Shown::Failed(_)) {
                failures += 1;
            }
            if !v.next_image() {
                break;
            }
        }
        assert_eq!(failures, 1);
        assert!(v.title().starts_with("Randomizer [2/2]"));
    }

    #[test]
    fn render_draws_image_between_strips() {
        let (_tmp, v) = viewer(&["a.png"]);
        let (w, h) = (180u32, 100u32);
        let mut frame = vec![0u32; (w * h) as usize];
        v.render(&mut frame, w, h);
        let px = |x: u32, y: u32| frame[(y * w + x) as usize];
        assert_eq!(px(90, 50), rgb(200, 0, 0));
        assert_eq!(px(90, 5), rgb(BG_COLOR[0], BG_COLOR[1], BG_COLOR[2]));
        assert_eq!(px(1, 1), rgb(NAV_COLOR.0, NAV_COLOR.1, NAV_COLOR.2));
    }

    #[test]
    fn larger_frame_keeps_fitted_layout() {
        // Viewport 180x100 with 10 px strips: the 8x4 image fits as 160x80 at (10, 10).
        let (_tmp, v) = viewer(&["a.png"]);
        let (w, h) = (240u32, 130u32);
        let mut frame = vec![0u32; (w * h) as usize];
        v.render(&mut frame, w, h);
        let px = |x: u32, y: u32| frame[(y * w + x) as usize];
        let red = rgb(200, 0, 0);
        let nav = rgb(NAV_COLOR.0, NAV_COLOR.1, NAV_COLOR.2);
        let bg = rgb(BG_COLOR[0], BG_COLOR[1], BG_COLOR[2]);

        let red_cols: Vec<u32> = (0..w).filter(|&x| px(x, 50) == red).collect();
        assert_eq!(red_cols.first(), Some(&10));
        assert_eq!(red_cols.last(), Some(&169));
        assert_eq!(red_cols.len(), 160);
        let red_rows: Vec<u32> = (0..h).filter(|&y| px(90, y) == red).collect();
        assert_eq!((red_rows.first(), red_rows.last()), (Some(&10), Some(&89)));

        assert_eq!(px(175, 2), nav);
        assert_eq!(px(200, 50), bg);
    }
}
