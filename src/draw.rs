//! Small raster primitives used by the icon renderer.
//!
//! Shapes take inclusive pixel bounds and are clipped to the canvas, so
//! callers can pass geometry that pokes past the edge at tiny sizes.

use image::{GrayImage, ImageBuffer, Pixel, Rgba, RgbaImage};

/// Inclusive pixel rectangle: `right` and `bottom` are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl PixelRect {
    pub const fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> i64 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top + 1
    }

    /// Intersect with a `width x height` canvas, `None` when nothing is left.
    fn clip(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        if width == 0 || height == 0 {
            return None;
        }
        let x0 = self.left.max(0);
        let y0 = self.top.max(0);
        let x1 = self.right.min(width as i64 - 1);
        let y1 = self.bottom.min(height as i64 - 1);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
fn cross(ax: i64, ay: i64, bx: i64, by: i64) -> i64 {
    ax * by - ay * bx
}

/// Overwrite every pixel of `rect` with `color`.
pub fn fill_rect<P: Pixel>(img: &mut ImageBuffer<P, Vec<P::Subpixel>>, rect: PixelRect, color: P) {
    let Some((x0, y0, x1, y1)) = rect.clip(img.width(), img.height()) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x, y, color);
        }
    }
}

/// Composite `color` source-over onto every pixel of `rect`.
pub fn blend_rect(img: &mut RgbaImage, rect: PixelRect, color: Rgba<u8>) {
    let Some((x0, y0, x1, y1)) = rect.clip(img.width(), img.height()) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            blend_over(img.get_pixel_mut(x, y), color);
        }
    }
}

/// Integer source-over so an opaque destination stays exactly opaque.
fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src.0[3] as u32;
    if sa == 0 {
        return;
    }
    let da = dst.0[3] as u32;
    // alpha scaled by 255
    let out_a = sa * 255 + da * (255 - sa);
    for c in 0..3 {
        let num = src.0[c] as u32 * sa * 255 + dst.0[c] as u32 * da * (255 - sa);
        dst.0[c] = ((num + out_a / 2) / out_a) as u8;
    }
    dst.0[3] = ((out_a + 127) / 255) as u8;
}

/// Fill a rectangle with circular corners of `radius` pixels.
///
/// A pixel is covered when its centre lies inside the continuous shape that
/// spans `[left, right + 1) x [top, bottom + 1)`. The radius is clamped to half
/// the shorter side.
pub fn fill_rounded_rect<P: Pixel>(
    img: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    rect: PixelRect,
    radius: i64,
    color: P,
) {
    let Some((x0, y0, x1, y1)) = rect.clip(img.width(), img.height()) else {
        return;
    };
    let r = radius.clamp(0, rect.width().min(rect.height()) / 2) as f64;
    let inner_left = rect.left as f64 + r;
    let inner_right = (rect.right + 1) as f64 - r;
    let inner_top = rect.top as f64 + r;
    let inner_bottom = (rect.bottom + 1) as f64 - r;

    for y in y0..=y1 {
        let cy = y as f64 + 0.5;
        let dy = (inner_top - cy).max(cy - inner_bottom).max(0.0);
        for x in x0..=x1 {
            let cx = x as f64 + 0.5;
            let dx = (inner_left - cx).max(cx - inner_right).max(0.0);
            if dx * dx + dy * dy <= r * r {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill the ellipse inscribed in `bbox`.
pub fn fill_ellipse(img: &mut RgbaImage, bbox: PixelRect, color: Rgba<u8>) {
    let Some((x0, y0, x1, y1)) = bbox.clip(img.width(), img.height()) else {
        return;
    };
    let rx = bbox.width() as f64 / 2.0;
    let ry = bbox.height() as f64 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let ex = bbox.left as f64 + rx;
    let ey = bbox.top as f64 + ry;

    for y in y0..=y1 {
        let ny = (y as f64 + 0.5 - ey) / ry;
        for x in x0..=x1 {
            let nx = (x as f64 + 0.5 - ex) / rx;
            if nx * nx + ny * ny <= 1.0 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill a convex polygon given in either winding order.
///
/// Pixel `(x, y)` is painted when the integer point lies inside the polygon or
/// on one of its edges, so axis-aligned outlines include their boundary rows.
pub fn fill_convex_polygon(img: &mut RgbaImage, points: &[(i64, i64)], color: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }
    let bbox = PixelRect::new(
        points.iter().map(|p| p.0).min().unwrap_or(0),
        points.iter().map(|p| p.1).min().unwrap_or(0),
        points.iter().map(|p| p.0).max().unwrap_or(-1),
        points.iter().map(|p| p.1).max().unwrap_or(-1),
    );
    let Some((x0, y0, x1, y1)) = bbox.clip(img.width(), img.height()) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            if point_in_convex(x as i64, y as i64, points) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn point_in_convex(px: i64, py: i64, points: &[(i64, i64)]) -> bool {
    let mut has_neg = false;
    let mut has_pos = false;
    for (i, &(ax, ay)) in points.iter().enumerate() {
        let (bx, by) = points[(i + 1) % points.len()];
        let c = cross(bx - ax, by - ay, px - ax, py - ay);
        has_neg |= c < 0;
        has_pos |= c > 0;
    }
    !(has_neg && has_pos)
}

/// Replace the alpha channel of `img` with the single-channel `mask`.
pub fn apply_alpha_mask(img: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(img.dimensions(), mask.dimensions());
    for (px, m) in img.pixels_mut().zip(mask.pixels()) {
        px.0[3] = m.0[0];
    }
}

/// Lower alpha wherever `mask` is more transparent than the canvas.
pub fn clip_alpha_to_mask(img: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(img.dimensions(), mask.dimensions());
    for (px, m) in img.pixels_mut().zip(mask.pixels()) {
        px.0[3] = px.0[3].min(m.0[0]);
    }
}
