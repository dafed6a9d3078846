//! Rasterizes a filled [`Grid`](crate::grid::Grid) and the reserved-area bits into the final RGB
//! marker image: the annulus/spike border, the 21x21 data grid, and the reserved mirrored pairs.
//!
//! Every primitive here samples a single point per pixel (the pixel center) and makes a binary
//! black/white decision. There is no anti-aliasing anywhere in this module, by design: the decoder
//! this format is read by makes the same hard per-module decision, and a soft edge would only
//! disagree with it about where the boundary falls.

use image::{Rgb, RgbImage};

use crate::grid::{Grid, GRID_SIZE};
use crate::reserved_area::CELL_PAIRS;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn color(bit: bool) -> Rgb<u8> {
    if bit {
        WHITE
    } else {
        BLACK
    }
}

/// Pixel-space geometry derived from the base unit `U`, mirroring the quantities the original
/// encoder computes before it draws anything.
struct Geometry {
    image_size: u32,
    origin: f64,
    /// `R_outer = 18U`: the outer black disk and ring.
    outer_radius: f64,
    /// `R_mid = 16U`: the middle annulus wipe and pieslice radius.
    mid_radius: f64,
    /// `R_inner = 15U`: the inner annulus wipe/pieslice radius, and the snapshot boundary.
    inner_radius: f64,
    grid_start_x: i64,
    grid_start_y: i64,
    full_grid_start_x: i64,
    full_grid_start_y: i64,
}

impl Geometry {
    fn new(u: u32) -> Geometry {
        let u = u as i64;
        let grid_diagonal = 15 * u;
        let outer_radius = grid_diagonal + 3 * u;
        let mid_radius = grid_diagonal + u;
        let inner_radius = grid_diagonal;

        let image_size = 2 * outer_radius;
        let origin = outer_radius;

        // `(grid_size * U) // 2` is integer floor division in the source; U is a positive integer
        // so Rust's integer division already floors here.
        let grid_start_x = origin - (GRID_SIZE as i64 * u) / 2;
        let grid_start_y = grid_start_x;

        let full_grid_start_x =
            (origin as f64 - ((36 * u) / 2) as f64 - (u as f64) / 2.0).floor() as i64;
        let full_grid_start_y = full_grid_start_x;

        Geometry {
            image_size: image_size as u32,
            origin: origin as f64,
            outer_radius: outer_radius as f64,
            mid_radius: mid_radius as f64,
            inner_radius: inner_radius as f64,
            grid_start_x,
            grid_start_y,
            full_grid_start_x,
            full_grid_start_y,
        }
    }
}

fn fill_rect(img: &mut RgbImage, x0: i64, y0: i64, x1_inclusive: i64, y1_inclusive: i64, c: Rgb<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1_inclusive.min(w - 1);
    let y1 = y1_inclusive.min(h - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x as u32, y as u32, c);
        }
    }
}

/// Fills a disk centered at `(cx, cy)` with radius `r`, testing pixel centers against the circle
/// equation (no edge anti-aliasing).
fn fill_disk(img: &mut RgbImage, cx: f64, cy: f64, r: f64, c: Rgb<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let x0 = ((cx - r).floor() as i64).max(0);
    let x1 = ((cx + r).ceil() as i64).min(w - 1);
    let y0 = ((cy - r).floor() as i64).max(0);
    let y1 = ((cy + r).ceil() as i64).min(h - 1);
    let r2 = r * r;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if dx * dx + dy * dy <= r2 {
                img.put_pixel(x as u32, y as u32, c);
            }
        }
    }
}

/// Angle of `(dx, dy)` in image space (y grows downward), in degrees, normalized to `[0, 360)`
/// with 0 at the positive x-axis and increasing clockwise on screen — the convention the
/// quadrant table below was written against.
fn angle_degrees(dx: f64, dy: f64) -> f64 {
    let deg = dy.atan2(dx).to_degrees();
    if deg < 0.0 {
        deg + 360.0
    } else {
        deg
    }
}

/// Fills the pie slice of the disk centered at `(cx, cy)`, radius `r`, between `start_deg`
/// (inclusive) and `end_deg` (exclusive).
fn fill_pieslice(img: &mut RgbImage, cx: f64, cy: f64, r: f64, start_deg: f64, end_deg: f64, c: Rgb<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let x0 = ((cx - r).floor() as i64).max(0);
    let x1 = ((cx + r).ceil() as i64).min(w - 1);
    let y0 = ((cy - r).floor() as i64).max(0);
    let y1 = ((cy + r).ceil() as i64).min(h - 1);
    let r2 = r * r;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let angle = angle_degrees(dx, dy);
            if angle >= start_deg && angle < end_deg {
                img.put_pixel(x as u32, y as u32, c);
            }
        }
    }
}

fn sign(p1: (f64, f64), p2: (f64, f64), p3: (f64, f64)) -> f64 {
    (p1.0 - p3.0) * (p2.1 - p3.1) - (p2.0 - p3.0) * (p1.1 - p3.1)
}

/// Fills a triangle given as three `(x, y)` points, via the standard three-sign-test.
fn fill_triangle(img: &mut RgbImage, a: (f64, f64), b: (f64, f64), c_pt: (f64, f64), c: Rgb<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let xs = [a.0, b.0, c_pt.0];
    let ys = [a.1, b.1, c_pt.1];
    let x0 = (xs.iter().cloned().fold(f64::INFINITY, f64::min).floor() as i64).max(0);
    let x1 = (xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max).ceil() as i64).min(w - 1);
    let y0 = (ys.iter().cloned().fold(f64::INFINITY, f64::min).floor() as i64).max(0);
    let y1 = (ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max).ceil() as i64).min(h - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = (x as f64 + 0.5, y as f64 + 0.5);
            let d1 = sign(p, a, b);
            let d2 = sign(p, b, c_pt);
            let d3 = sign(p, c_pt, a);
            let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
            let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
            if !(has_neg && has_pos) {
                img.put_pixel(x as u32, y as u32, c);
            }
        }
    }
}

/// Strokes a 1-module-wide circular outline at radius `r`, used to redraw the outer ring's edge
/// after the spikes have painted over it.
fn stroke_circle(img: &mut RgbImage, cx: f64, cy: f64, r: f64, c: Rgb<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let x0 = ((cx - r - 1.0).floor() as i64).max(0);
    let x1 = ((cx + r + 1.0).ceil() as i64).min(w - 1);
    let y0 = ((cy - r - 1.0).floor() as i64).max(0);
    let y1 = ((cy + r + 1.0).ceil() as i64).min(h - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if (dist - r).abs() < 0.5 {
                img.put_pixel(x as u32, y as u32, c);
            }
        }
    }
}

/// The four annulus quadrants in drawing order, each a `(start_deg, end_deg, middle_bit,
/// inner_bit)` tuple. The angle ranges follow [`angle_degrees`]'s convention.
const QUADRANTS: [(f64, f64, bool, bool); 4] = [
    (0.0, 90.0, true, true),
    (90.0, 180.0, true, false),
    (180.0, 270.0, false, true),
    (270.0, 360.0, false, false),
];

/// Renders the complete marker: border annuli and spikes, the 21x21 data grid, and the reserved
/// mirrored-pair cells.
pub fn render(grid: &Grid, reserved_bits: &[bool], u: u32) -> RgbImage {
    let geo = Geometry::new(u);
    let mut img = RgbImage::from_pixel(geo.image_size, geo.image_size, WHITE);

    fill_disk(&mut img, geo.origin, geo.origin, geo.outer_radius, BLACK);
    fill_disk(&mut img, geo.origin, geo.origin, geo.mid_radius, WHITE);
    fill_disk(&mut img, geo.origin, geo.origin, geo.inner_radius, WHITE);

    let grid_half_size = (GRID_SIZE as f64 * u as f64) / 2.0;
    let border_middle = [
        (geo.origin + grid_half_size, geo.origin),
        (geo.origin, geo.origin - grid_half_size),
        (geo.origin - grid_half_size, geo.origin),
        (geo.origin, geo.origin + grid_half_size),
    ];
    let spike_tips = [
        (geo.origin + geo.outer_radius, geo.origin - geo.outer_radius),
        (geo.origin - geo.outer_radius, geo.origin - geo.outer_radius),
        (geo.origin - geo.outer_radius, geo.origin + geo.outer_radius),
        (geo.origin + geo.outer_radius, geo.origin + geo.outer_radius),
    ];
    for i in 0..4 {
        let tip = spike_tips[i];
        let p1 = border_middle[i];
        let p2 = border_middle[(i + 1) % 4];
        fill_triangle(&mut img, tip, p1, p2, BLACK);
    }

    // Snapshot the inner circle before the quadrant pieslices touch it, then restore it once
    // they're done: the interior disk stays an undivided field, with the pieslice pass only ever
    // meant to reach the middle and inner annuli outside it.
    let snapshot = snapshot_inner_circle(&img, geo.origin, geo.inner_radius);

    for &(start, end, middle_bit, inner_bit) in &QUADRANTS {
        fill_pieslice(&mut img, geo.origin, geo.origin, geo.mid_radius, start, end, color(!middle_bit));
        fill_pieslice(&mut img, geo.origin, geo.origin, geo.inner_radius, start, end, color(!inner_bit));
    }

    restore_inner_circle(&mut img, &snapshot, geo.origin, geo.inner_radius);

    stroke_circle(&mut img, geo.origin, geo.origin, geo.outer_radius, BLACK);

    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let u = u as i64;
            let x0 = geo.grid_start_x + x as i64 * u;
            let y0 = geo.grid_start_y + y as i64 * u;
            fill_rect(&mut img, x0, y0, x0 + u - 1, y0 + u - 1, color(grid.get(x, y)));
        }
    }

    paint_reserved_area(&mut img, &geo, u, reserved_bits);

    img
}

/// One pixel of the saved inner circle: its coordinates relative to the crop origin and its
/// color, recorded only for pixels inside the circle.
struct InnerPixel {
    dx: u32,
    dy: u32,
    color: Rgb<u8>,
}

fn snapshot_inner_circle(img: &RgbImage, origin: f64, inner_radius: f64) -> Vec<InnerPixel> {
    let side = (2.0 * inner_radius) as i64;
    let x0 = (origin - inner_radius) as i64;
    let y0 = (origin - inner_radius) as i64;
    let cx = origin - x0 as f64;
    let cy = origin - y0 as f64;
    let mut out = Vec::new();
    for dy in 0..side {
        for dx in 0..side {
            let px = dx as f64 + 0.5 - cx;
            let py = dy as f64 + 0.5 - cy;
            if px * px + py * py <= inner_radius * inner_radius {
                let ix = x0 + dx;
                let iy = y0 + dy;
                if ix >= 0 && iy >= 0 && (ix as u32) < img.width() && (iy as u32) < img.height() {
                    out.push(InnerPixel {
                        dx: dx as u32,
                        dy: dy as u32,
                        color: *img.get_pixel(ix as u32, iy as u32),
                    });
                }
            }
        }
    }
    out
}

fn restore_inner_circle(img: &mut RgbImage, snapshot: &[InnerPixel], origin: f64, inner_radius: f64) {
    let x0 = (origin - inner_radius) as i64;
    let y0 = (origin - inner_radius) as i64;
    for pixel in snapshot {
        let ix = x0 + pixel.dx as i64;
        let iy = y0 + pixel.dy as i64;
        if ix >= 0 && iy >= 0 && (ix as u32) < img.width() && (iy as u32) < img.height() {
            img.put_pixel(ix as u32, iy as u32, pixel.color);
        }
    }
}

fn paint_reserved_area(img: &mut RgbImage, geo: &Geometry, u: u32, reserved_bits: &[bool]) {
    let u = u as i64;
    for (i, &(primary, mirror)) in CELL_PAIRS.iter().enumerate() {
        let Some(&bit) = reserved_bits.get(i) else {
            break;
        };
        for (x, y) in [primary, mirror] {
            let x0 = geo.full_grid_start_x + x as i64 * u;
            let y0 = geo.full_grid_start_y + y as i64 * u;
            fill_rect(img, x0, y0, x0 + u - 1, y0 + u - 1, color(bit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;

    #[test]
    fn render_produces_a_square_image_sized_from_u() {
        let grid = build_grid(&vec![true; 280]).unwrap();
        let img = render(&grid, &[false; 24], 4);
        // image_size = 2 * (15*U + 3*U) = 36*U
        assert_eq!(img.width(), 36 * 4);
        assert_eq!(img.height(), 36 * 4);
    }

    #[test]
    fn dead_center_is_inside_the_inner_circle_left_untouched_by_quadrants() {
        // The center pixel sits inside the inner circle, which the pieslice pass never reaches
        // (it is snapshotted before and restored after): it should remain the background white
        // regardless of quadrant bits.
        let grid = build_grid(&vec![true; 280]).unwrap();
        let img = render(&grid, &[false; 24], 6);
        let center = img.width() / 2;
        assert_eq!(*img.get_pixel(center, center), WHITE);
    }

    #[test]
    fn outer_corners_are_white_outside_the_outer_disk() {
        let grid = build_grid(&vec![true; 280]).unwrap();
        let img = render(&grid, &[false; 24], 4);
        assert_eq!(*img.get_pixel(0, 0), WHITE);
        assert_eq!(*img.get_pixel(img.width() - 1, 0), WHITE);
    }

    #[test]
    fn angle_degrees_matches_quadrant_table_orientation() {
        // bottom-right (dx>0, dy>0) falls in Q4's 0..90 range.
        assert!(angle_degrees(1.0, 1.0) < 90.0);
        // top-right (dx>0, dy<0) falls in the last quadrant's 270..360 range.
        assert!(angle_degrees(1.0, -1.0) >= 270.0);
    }
}
