//! Icon composition: the badge renderer.
//!
//! Draws the layered toolbar badge onto a transparent canvas: a two-tone
//! disk, a checkmark glyph, and an accent that depends on the icon size.
//! Large icons get a clock (the automation cue); small ones get a plain dot,
//! because clock hands are not legible under 48 pixels.
//!
//! All geometry derives from the icon size by fixed ratios against a 128px
//! reference design, truncating after each ratio multiplication, so every
//! size produces the same layout every run.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::Point;
use crate::render::{draw_circle, draw_ring, draw_stroked_line};

// ============================================================================
// Palette
// ============================================================================

/// Outer disk fill (brand orange).
pub const BADGE_PRIMARY: Rgba = Rgba::from_rgb_hex(0xFF6B35);

/// Inner disk fill (brand gold).
pub const BADGE_SECONDARY: Rgba = Rgba::from_rgb_hex(0xFFA500);

/// Clock face fill: semi-transparent blue. Drawn with replace semantics, so
/// exported pixels carry exactly this alpha.
pub const CLOCK_FILL: Rgba = Rgba::from_rgb_hex(0x1890FF).with_alpha(180);

/// Stroke color for the checkmark, clock ring, and hands.
pub const STROKE: Rgba = Rgba::WHITE;

// ============================================================================
// Layout Constants
// ============================================================================

/// Design reference size; all stroke widths and accent dimensions scale
/// relative to this.
const REFERENCE_SIZE: f32 = 128.0;

/// Smallest size that still renders the clock accent (inclusive). Below
/// this the accent is a plain dot.
const CLOCK_MIN_SIZE: u32 = 48;

// ============================================================================
// Badge Renderer
// ============================================================================

/// Renderer for one badge icon at a fixed pixel size.
///
/// # Example
///
/// ```
/// use iconforge::icon::IconBadge;
///
/// let canvas = IconBadge::new(48).render().unwrap();
/// assert_eq!(canvas.width(), 48);
/// assert_eq!(canvas.height(), 48);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IconBadge {
    size: u32,
}

impl IconBadge {
    /// Create a renderer for a `size` x `size` icon.
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self { size }
    }

    /// Get the icon pixel size.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Whether this size renders the clock accent (vs. the small dot).
    #[must_use]
    pub const fn has_clock(&self) -> bool {
        self.size >= CLOCK_MIN_SIZE
    }

    /// Render the badge onto a fresh transparent canvas.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimensions`] for a zero size.
    pub fn render(&self) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.size, self.size)?;

        let size = self.size as f32;
        let scale = size / REFERENCE_SIZE;
        let half = (self.size / 2) as i32;
        let center = Point::new(half, half);

        self.draw_badge(&mut canvas, center, size);
        self.draw_checkmark(&mut canvas, center, size, scale);

        if self.has_clock() {
            self.draw_clock(&mut canvas, center, size, scale);
        } else {
            self.draw_dot(&mut canvas, center, size, scale);
        }

        Ok(canvas)
    }

    /// Two-tone background: outer orange disk with a smaller gold disk
    /// layered on top, leaving an orange ring.
    fn draw_badge(&self, canvas: &mut Canvas, center: Point, size: f32) {
        let outer = (size * 0.45) as i32;
        let inner = (outer as f32 * 0.85) as i32;

        draw_circle(canvas, center.x, center.y, outer, BADGE_PRIMARY);
        draw_circle(canvas, center.x, center.y, inner, BADGE_SECONDARY);
    }

    /// Checkmark glyph: two stroked segments through three anchor points
    /// offset from center.
    fn draw_checkmark(&self, canvas: &mut Canvas, center: Point, size: f32, scale: f32) {
        let glyph = (size * 0.3 * scale) as i32;
        let width = ((3.0 * scale) as i32).max(2);

        // Anchor offsets truncate per ratio, like the glyph span itself
        let arm = |ratio: f32| (glyph as f32 * ratio) as i32;

        let start = center.offset(-arm(0.3), 0);
        let mid = center.offset(-arm(0.1), arm(0.15));
        let end = center.offset(arm(0.2), arm(0.3));

        draw_stroked_line(canvas, start.x, start.y, mid.x, mid.y, width, STROKE);
        draw_stroked_line(canvas, mid.x, mid.y, end.x, end.y, width, STROKE);
    }

    /// Clock accent, up and right of center: semi-transparent face, white
    /// ring, and hands at 12 and 3 o'clock.
    fn draw_clock(&self, canvas: &mut Canvas, center: Point, size: f32, scale: f32) {
        let radius = (size * 0.25 * scale) as i32;
        let offset = (size * 0.2 * scale) as i32;
        let clock = center.offset(offset, -offset);
        let stroke = ((2.0 * scale) as i32).max(1);

        draw_circle(canvas, clock.x, clock.y, radius, CLOCK_FILL);
        draw_ring(canvas, clock.x, clock.y, radius, stroke, STROKE);

        let hub = (radius as f32 * 0.2) as i32;
        let hand = (radius as f32 * 0.6) as i32;

        // 12 o'clock
        draw_stroked_line(
            canvas,
            clock.x,
            clock.y - hub,
            clock.x,
            clock.y - hand,
            stroke,
            STROKE,
        );
        // 3 o'clock
        draw_stroked_line(
            canvas,
            clock.x + hub,
            clock.y,
            clock.x + hand,
            clock.y,
            stroke,
            STROKE,
        );
    }

    /// Small-size accent: a plain filled dot above the checkmark.
    fn draw_dot(&self, canvas: &mut Canvas, center: Point, size: f32, scale: f32) {
        let diameter = (size * 0.15 * scale) as i32;
        let dot = center.offset(0, -((size * 0.25 * scale) as i32));

        draw_circle(canvas, dot.x, dot.y, diameter / 2, STROKE);
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
