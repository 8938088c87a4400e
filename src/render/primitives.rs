//! Primitive rendering functions.
//!
//! Implements rasterization algorithms for the shapes the badge renderer
//! needs. All primitives clip at canvas bounds and draw with replace
//! semantics: the written pixel is exactly the requested color, alpha
//! included, so semi-transparent shapes keep their stated alpha in the
//! exported PNG.

use crate::canvas::Canvas;
use crate::color::Rgba;

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line using Bresenham's algorithm.
///
/// # Arguments
///
/// * `canvas` - Target canvas
/// * `x0`, `y0` - Start coordinates
/// * `x1`, `y1` - End coordinates
/// * `color` - Line color
pub fn draw_line(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && y >= 0 {
            canvas.set_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw a line segment with a stroke width.
///
/// Walks the Bresenham path and stamps a filled disk of radius `width / 2`
/// at each step, which keeps joins and endpoints solid. A zero-length
/// segment stamps a single disk, so degenerate glyphs at tiny icon sizes
/// still leave visible pixels.
///
/// `width <= 1` degrades to a plain [`draw_line`].
pub fn draw_stroked_line(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: i32,
    color: Rgba,
) {
    if width <= 1 {
        draw_line(canvas, x0, y0, x1, y1, color);
        return;
    }

    let radius = width / 2;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        draw_circle(canvas, x, y, radius, color);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Draw a filled circle using the midpoint algorithm.
///
/// A zero radius plots a single pixel; a negative radius is a no-op.
///
/// # Arguments
///
/// * `canvas` - Target canvas
/// * `cx`, `cy` - Center coordinates
/// * `radius` - Circle radius in pixels
/// * `color` - Fill color
pub fn draw_circle(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, color: Rgba) {
    if radius <= 0 {
        if radius == 0 && cx >= 0 && cy >= 0 {
            canvas.set_pixel(cx as u32, cy as u32, color);
        }
        return;
    }

    // Midpoint circle algorithm, filled with horizontal scan spans
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        draw_horizontal_line(canvas, cx - x, cx + x, cy + y, color);
        draw_horizontal_line(canvas, cx - x, cx + x, cy - y, color);
        draw_horizontal_line(canvas, cx - y, cx + y, cy + x, color);
        draw_horizontal_line(canvas, cx - y, cx + y, cy - x, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Draw a ring: the annulus of pixels at distance `(outer - width, outer]`
/// from the center.
///
/// Filled per scanline by subtracting the inner span from the outer one,
/// which avoids the moiré gaps that stacking one-pixel outlines produces.
/// A `width` that reaches or passes the center degrades to a filled circle.
pub fn draw_ring(canvas: &mut Canvas, cx: i32, cy: i32, outer: i32, width: i32, color: Rgba) {
    if width <= 0 {
        return;
    }

    let inner = outer - width;
    if inner <= 0 {
        draw_circle(canvas, cx, cy, outer, color);
        return;
    }

    for dy in -outer..=outer {
        let y = cy + dy;
        let xo = (((outer * outer - dy * dy) as f32).sqrt()) as i32;

        if dy.abs() > inner {
            // Past the inner circle's vertical extent: the whole chord is ring
            draw_horizontal_line(canvas, cx - xo, cx + xo, y, color);
        } else {
            // Leave the inner disk untouched on both sides
            let xi = (((inner * inner - dy * dy) as f32).sqrt()) as i32 + 1;
            draw_horizontal_line(canvas, cx - xo, cx - xi, y, color);
            draw_horizontal_line(canvas, cx + xi, cx + xo, y, color);
        }
    }
}

/// Helper to draw a horizontal span (used by filled circle and ring).
#[inline]
fn draw_horizontal_line(canvas: &mut Canvas, x1: i32, x2: i32, y: i32, color: Rgba) {
    if y < 0 || y >= canvas.height() as i32 {
        return;
    }

    let x_start = x1.max(0) as u32;
    let x_end = (x2 + 1).max(0).min(canvas.width() as i32) as u32;

    if x_start < x_end {
        let width = x_end - x_start;
        canvas.fill_rect(x_start, y as u32, width, 1, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
