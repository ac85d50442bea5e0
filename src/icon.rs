//! Procedural launcher icon: rounded blue gradient badge, dog-eared invoice
//! page with text bars, orange scan lines and a small delivery truck.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ColorType, GrayImage, ImageEncoder, Luma, Rgba, RgbaImage};
use log::info;

use crate::draw::{
    apply_alpha_mask, blend_rect, clip_alpha_to_mask, fill_convex_polygon, fill_ellipse,
    fill_rect, fill_rounded_rect, lerp, PixelRect,
};
use crate::error::{IconError, Result};

/// Largest edge length accepted by [`IconSpec::new`].
pub const MAX_ICON_SIZE: u32 = 8192;

/// Fixed icon colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary_blue: Rgba<u8>,
    pub accent_orange: Rgba<u8>,
    pub white: Rgba<u8>,
    pub dark_blue: Rgba<u8>,
    pub fold_gray: Rgba<u8>,
}

pub const PALETTE: Palette = Palette {
    primary_blue: Rgba([33, 150, 243, 255]),  // #2196F3
    accent_orange: Rgba([255, 152, 0, 255]),  // #FF9800
    white: Rgba([255, 255, 255, 255]),
    dark_blue: Rgba([21, 101, 192, 255]),     // #1565C0
    fold_gray: Rgba([200, 200, 200, 255]),
};

/// A validated icon edge length in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    size: u32,
}

impl IconSpec {
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 || size > MAX_ICON_SIZE {
            return Err(IconError::InvalidSize { size, max: MAX_ICON_SIZE });
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

#[inline]
fn scaled(base: i64, factor: f64) -> i64 {
    (base as f64 * factor).round() as i64
}

/// Top-left corner plus extent of the invoice page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentBox {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub fold: i64,
}

impl DocumentBox {
    /// Page outline with the top-right corner folded over.
    pub fn outline(&self) -> [(i64, i64); 5] {
        let (x, y, w, h, f) = (self.x, self.y, self.width, self.height, self.fold);
        [(x, y), (x + w - f, y), (x + w, y + f), (x + w, y + h), (x, y + h)]
    }

    pub fn fold_triangle(&self) -> [(i64, i64); 3] {
        let (x, y, w, f) = (self.x, self.y, self.width, self.fold);
        [(x + w - f, y), (x + w, y + f), (x + w - f, y + f)]
    }
}

/// Every shape of the icon in pixel coordinates for one size.
#[derive(Debug, Clone, PartialEq)]
pub struct IconLayout {
    pub size: u32,
    pub margin: i64,
    pub corner_radius: i64,
    pub document: DocumentBox,
    pub text_bars: Vec<PixelRect>,
    /// Scan line rectangle and its opacity.
    pub scan_lines: Vec<(PixelRect, u8)>,
    pub truck_cab: PixelRect,
    pub truck_cargo: PixelRect,
    pub wheels: [PixelRect; 2],
}

const TEXT_BAR_COUNT: i64 = 4;
const SCAN_LINE_COUNT: i64 = 3;
const STROKE: i64 = 2;
const SCAN_OVERHANG: i64 = 5;
const TRUCK_CORNER_RADIUS: i64 = 2;
const CARGO_OVERLAP: i64 = 2;

impl IconLayout {
    pub fn new(spec: IconSpec) -> Self {
        let s = spec.size() as i64;
        let margin = scaled(s, 0.08);
        let corner_radius = scaled(s, 0.22);

        let doc_width = scaled(s, 0.45);
        let doc_height = scaled(s, 0.55);
        let document = DocumentBox {
            x: scaled(s, 0.28),
            y: scaled(s, 0.22),
            width: doc_width,
            height: doc_height,
            fold: scaled(doc_width, 0.25),
        };

        let bar_left = document.x + scaled(doc_width, 0.15);
        let bar_top = document.y + scaled(doc_height, 0.22);
        let bar_spacing = scaled(doc_height, 0.12);
        let bar_len = scaled(doc_width, 0.70);
        let text_bars = (0..TEXT_BAR_COUNT)
            .map(|i| {
                let y = bar_top + i * bar_spacing;
                let len = if i < TEXT_BAR_COUNT - 1 { bar_len } else { scaled(bar_len, 0.6) };
                PixelRect::new(bar_left, y, bar_left + len, y + STROKE - 1)
            })
            .collect();

        let scan_top = document.y + scaled(doc_height, 0.40);
        let scan_spacing = scaled(doc_height, 0.08);
        let scan_lines = (0..SCAN_LINE_COUNT)
            .map(|i| {
                let y = scan_top + i * scan_spacing;
                let rect = PixelRect::new(
                    document.x - SCAN_OVERHANG,
                    y,
                    document.x + doc_width + SCAN_OVERHANG,
                    y + STROKE - 1,
                );
                (rect, (200 - 40 * i) as u8)
            })
            .collect();

        let truck = scaled(s, 0.18);
        let tx = s - margin - truck - scaled(s, 0.08);
        let ty = tx;
        let truck_bottom = ty + truck;
        let cab_w = scaled(truck, 0.35);
        let cab_h = scaled(truck, 0.60);
        let cargo_w = scaled(truck, 0.65);
        let cargo_h = scaled(truck, 0.75);
        let truck_cab = PixelRect::new(tx, truck_bottom - cab_h, tx + cab_w, truck_bottom);
        let truck_cargo = PixelRect::new(
            tx + cab_w - CARGO_OVERLAP,
            truck_bottom - cargo_h,
            tx + cab_w + cargo_w,
            truck_bottom,
        );

        let wheel_r = scaled(truck, 0.12);
        let wheel_y = truck_bottom - wheel_r / 2;
        let front_x = tx + cab_w / 2;
        let rear_right = tx + cab_w + cargo_w;
        let wheels = [
            PixelRect::new(front_x - wheel_r, wheel_y - wheel_r, front_x + wheel_r, wheel_y + wheel_r),
            PixelRect::new(rear_right - 2 * wheel_r, wheel_y - wheel_r, rear_right, wheel_y + wheel_r),
        ];

        Self {
            size: spec.size(),
            margin,
            corner_radius,
            document,
            text_bars,
            scan_lines,
            truck_cab,
            truck_cargo,
            wheels,
        }
    }

    /// Pixels covered by the rounded background badge (before corner rounding).
    pub fn badge(&self) -> PixelRect {
        let far = self.size as i64 - self.margin - 1;
        PixelRect::new(self.margin, self.margin, far, far)
    }
}

/// Render the icon at `size x size` pixels.
pub fn render_icon(size: u32) -> Result<RgbaImage> {
    let layout = IconLayout::new(IconSpec::new(size)?);
    Ok(paint(&layout))
}

fn paint(layout: &IconLayout) -> RgbaImage {
    let size = layout.size;
    let mut img = RgbaImage::new(size, size);

    paint_background(&mut img, layout);

    let mut mask = GrayImage::new(size, size);
    fill_rounded_rect(&mut mask, layout.badge(), layout.corner_radius, Luma([255]));
    apply_alpha_mask(&mut img, &mask);

    fill_convex_polygon(&mut img, &layout.document.outline(), PALETTE.white);
    fill_convex_polygon(&mut img, &layout.document.fold_triangle(), PALETTE.fold_gray);

    for bar in &layout.text_bars {
        fill_rect(&mut img, *bar, PALETTE.primary_blue);
    }

    for &(line, opacity) in &layout.scan_lines {
        let mut color = PALETTE.accent_orange;
        color.0[3] = opacity;
        blend_rect(&mut img, line, color);
    }

    fill_rounded_rect(&mut img, layout.truck_cab, TRUCK_CORNER_RADIUS, PALETTE.accent_orange);
    fill_rounded_rect(&mut img, layout.truck_cargo, TRUCK_CORNER_RADIUS, PALETTE.accent_orange);
    for wheel in layout.wheels {
        fill_ellipse(&mut img, wheel, PALETTE.dark_blue);
    }

    // small sizes push the rear wheel past the badge corner
    clip_alpha_to_mask(&mut img, &mask);
    img
}

/// Vertical dark-to-primary blue gradient across the full width; the alpha
/// mask trims it to the badge afterwards.
fn paint_background(img: &mut RgbaImage, layout: &IconLayout) {
    let size = layout.size as i64;
    let span = size - 2 * layout.margin;
    if span <= 0 {
        return;
    }
    let from = PALETTE.dark_blue.0;
    let to = PALETTE.primary_blue.0;
    for row in layout.margin..size - layout.margin {
        let t = (row - layout.margin) as f64 / span as f64;
        let mut color = [0u8; 4];
        for c in 0..3 {
            color[c] = lerp(from[c] as f64, to[c] as f64, t).round() as u8;
        }
        color[3] = 255;
        fill_rect(img, PixelRect::new(0, row, size - 1, row), Rgba(color));
    }
}

/// Encode an icon as 8-bit RGBA PNG.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    PngEncoder::new(&mut buf)
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)
        .map_err(|source| IconError::Encode { size: img.width(), source })?;
    Ok(buf.into_inner())
}

/// Render an icon and write it to `path` as PNG.
pub fn create_icon(size: u32, path: &Path) -> Result<RgbaImage> {
    let img = render_icon(size)?;
    let png = encode_png(&img)?;
    write_replacing(path, &png)?;
    info!("Created icon: {} ({}x{})", path.display(), size, size);
    Ok(img)
}

/// Write through a sibling temp file so a failed write never leaves a
/// truncated PNG under the final name.
fn write_replacing(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = temp_sibling(path);
    let result = fs::write(&tmp, bytes).and_then(|_| fs::rename(&tmp, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp);
        return Err(IconError::Write { path: path.to_path_buf(), source });
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
