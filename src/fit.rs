use crate::error::{Error, Result};

/// Scale `image_w` x `image_h` to the largest size that fits inside the viewport
/// without changing its aspect ratio.
///
/// The axis with the smaller multiplier binds: it is filled exactly and the other
/// axis follows from the same multiplier. Equal multipliers take the width branch.
pub fn fit(image_w: f64, image_h: f64, viewport_w: f64, viewport_h: f64) -> Result<(f64, f64)> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(image_w) || !valid(image_h) {
        return Err(Error::InvalidImage {
            width: image_w,
            height: image_h,
        });
    }

    let height_mult = viewport_h / image_h;
    let width_mult = viewport_w / image_w;

    if height_mult < width_mult {
        Ok((image_w * height_mult, viewport_h))
    } else {
        Ok((viewport_w, image_h * width_mult))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn landscape_in_square_is_width_bound() {
        assert_eq!(fit(800.0, 600.0, 1000.0, 1000.0).unwrap(), (1000.0, 750.0));
    }

    #[test]
    fn portrait_on_wide_screen_is_height_bound() {
        let (w, h) = fit(1000.0, 2000.0, 1840.0, 1080.0).unwrap();
        assert_eq!(h, 1080.0);
        assert!((w - 540.0).abs() < EPS);
    }

    #[test]
    fn small_images_are_enlarged() {
        assert_eq!(fit(100.0, 50.0, 1000.0, 1000.0).unwrap(), (1000.0, 500.0));
    }

    #[test]
    fn equal_multipliers_fill_both_axes() {
        assert_eq!(fit(400.0, 300.0, 800.0, 600.0).unwrap(), (800.0, 600.0));
    }

    #[test]
    fn never_overflows_and_keeps_aspect_ratio() {
        let sizes = [1.0, 3.0, 17.0, 480.0, 599.0, 1080.0, 4032.0, 12000.0];
        for &iw in &sizes {
            for &ih in &sizes {
                for &(vw, vh) in &[(1840.0, 1080.0), (1000.0, 1000.0), (333.0, 1024.0)] {
                    let (dw, dh) = fit(iw, ih, vw, vh).unwrap();
                    assert!(dw <= vw + EPS && dh <= vh + EPS, "{iw}x{ih} in {vw}x{vh}");
                    let ratio = (dw / iw) / (dh / ih);
                    assert!((ratio - 1.0).abs() < 1e-9, "{iw}x{ih} in {vw}x{vh}");
                    assert!((dw - vw).abs() < EPS || (dh - vh).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn degenerate_images_are_rejected() {
        assert!(matches!(fit(0.0, 600.0, 100.0, 100.0), Err(Error::InvalidImage { .. })));
        assert!(matches!(fit(800.0, 0.0, 100.0, 100.0), Err(Error::InvalidImage { .. })));
        assert!(matches!(fit(f64::NAN, 1.0, 100.0, 100.0), Err(Error::InvalidImage { .. })));
    }
}
