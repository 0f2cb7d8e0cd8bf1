// ---------------------------------------------------------------------------
// Software rendering primitives (softbuffer frame, u32 per pixel, 0x00RRGGBB)
// ---------------------------------------------------------------------------

pub const BG_COLOR: [u8; 4] = [31, 31, 31, 255];
pub const NAV_COLOR: (u8, u8, u8, u8) = (58, 58, 58, 255);
pub const CHEVRON_COLOR: (u8, u8, u8, u8) = (230, 230, 230, 255);
pub const ERROR_COLOR: (u8, u8, u8, u8) = (120, 24, 24, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

pub fn rgb(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

fn unpack_rgb(v: u32) -> (u8, u8, u8) {
    (((v >> 16) & 0xFF) as u8, ((v >> 8) & 0xFF) as u8, (v & 0xFF) as u8)
}

fn blend(dst: u32, color: (u8, u8, u8, u8)) -> u32 {
    let a = color.3 as u32;
    if a == 255 {
        return rgb(color.0, color.1, color.2);
    }
    let (dr, dg, db) = unpack_rgb(dst);
    let r = ((color.0 as u32 * a + dr as u32 * (255 - a)) / 255) as u8;
    let g = ((color.1 as u32 * a + dg as u32 * (255 - a)) / 255) as u8;
    let b = ((color.2 as u32 * a + db as u32 * (255 - a)) / 255) as u8;
    rgb(r, g, b)
}

pub fn fill_rect(buf: &mut [u32], stride: u32, buf_h: u32, rx: i32, ry: i32, rw: u32, rh: u32, color: (u8, u8, u8, u8)) {
    let x_start = rx.max(0) as u32;
    let y_start = ry.max(0) as u32;
    let x_end = (rx as i64 + rw as i64).clamp(0, stride as i64) as u32;
    let y_end = (ry as i64 + rh as i64).clamp(0, buf_h as i64) as u32;
    for y in y_start..y_end {
        let row = (y * stride) as usize;
        for x in x_start..x_end {
            let off = row + x as usize;
            buf[off] = blend(buf[off], color);
        }
    }
}

/// Draw a "<" or ">" chevron centred on (cx, cy), `size` pixels tall.
pub fn draw_chevron(
    buf: &mut [u32], stride: u32, buf_h: u32,
    cx: i32, cy: i32, size: u32, thickness: u32,
    dir: Direction, color: (u8, u8, u8, u8),
) {
    let half = (size / 2) as i32;
    let t = thickness.max(1);
    for dy in -half..=half {
        // Each row is one short horizontal run; the run's offset traces the arms.
        let reach = half - dy.abs();
        let x = match dir {
            Direction::Left => cx - reach / 2,
            Direction::Right => cx + reach / 2 - t as i32,
        };
        fill_rect(buf, stride, buf_h, x, cy + dy, t, 1, color);
    }
}

/// Nearest-neighbour blit of an RGBA8 image at (x0, y0), scaled by `scale_x`/`scale_y`.
pub fn blit_scaled(
    dst: &mut [u32], dst_w: u32, dst_h: u32,
    src: &[u8], src_w: u32, src_h: u32,
    x0: f32, y0: f32, scale_x: f32, scale_y: f32,
) {
    if scale_x <= 0.0 || scale_y <= 0.0 {
        return;
    }
    let draw_w = src_w as f32 * scale_x;
    let draw_h = src_h as f32 * scale_y;

    let dx_start = (x0.max(0.0)) as u32;
    let dy_start = (y0.max(0.0)) as u32;
    let dx_end = ((x0 + draw_w).ceil().max(0.0) as u32).min(dst_w);
    let dy_end = ((y0 + draw_h).ceil().max(0.0) as u32).min(dst_h);

    let inv_x = 1.0 / scale_x;
    let inv_y = 1.0 / scale_y;

    for dy in dy_start..dy_end {
        let sy = ((dy as f32 - y0) * inv_y) as u32;
        if sy >= src_h {
            continue;
        }
        for dx in dx_start..dx_end {
            let sx = ((dx as f32 - x0) * inv_x) as u32;
            if sx >= src_w {
                continue;
            }

            let si = (sy as usize * src_w as usize + sx as usize) * 4;
            let di = dy as usize * dst_w as usize + dx as usize;

            let sa = src[si + 3];
            if sa > 0 {
                dst[di] = blend(dst[di], (src[si], src[si + 1], src[si + 2], sa));
            }
        }
    }
}
