//! Pixel verification tests for the badge renderer.
//!
//! These assert the rendered compositions pixel by pixel: disk colors,
//! checkmark strokes, and the clock-vs-dot accent branch at the 48px
//! threshold.

#![allow(clippy::unwrap_used)]

use iconforge::icon::{IconBadge, BADGE_PRIMARY, BADGE_SECONDARY, CLOCK_FILL};
use iconforge::prelude::*;

/// Count pixels in a canvas that match a color exactly.
fn count_matching(canvas: &Canvas, color: Rgba) -> usize {
    let mut count = 0;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            if canvas.get_pixel(x, y) == Some(color) {
                count += 1;
            }
        }
    }
    count
}

// ============================================================================
// Dimensions
// ============================================================================

/// Every manifest size renders a canvas of exactly size x size pixels.
#[test]
fn all_manifest_sizes_render_square_canvases() {
    for size in ICON_SIZES {
        let canvas = IconBadge::new(size).render().unwrap();
        assert_eq!(canvas.width(), size, "width mismatch at {size}px");
        assert_eq!(canvas.height(), size, "height mismatch at {size}px");
    }
}

// ============================================================================
// Accent branch selection
// ============================================================================

/// 48px takes the clock branch: the threshold is inclusive on the clock side.
#[test]
fn threshold_size_renders_clock() {
    let canvas = IconBadge::new(48).render().unwrap();

    assert!(
        count_matching(&canvas, CLOCK_FILL) > 0,
        "48px icon must contain clock face pixels"
    );

    // Clock face sits up-right of center (center 24, clock center (27, 21))
    assert_eq!(canvas.get_pixel(25, 22), Some(CLOCK_FILL));
}

/// One below the threshold renders the dot accent, no clock.
#[test]
fn below_threshold_renders_dot() {
    let canvas = IconBadge::new(47).render().unwrap();

    assert_eq!(count_matching(&canvas, CLOCK_FILL), 0);
}

/// Small sizes have no clock pixels at all, but do carry a white dot
/// above center.
#[test]
fn small_sizes_have_dot_not_clock() {
    for size in [16, 32] {
        let canvas = IconBadge::new(size).render().unwrap();
        assert_eq!(
            count_matching(&canvas, CLOCK_FILL),
            0,
            "{size}px icon must not contain clock pixels"
        );
        assert!(
            count_matching(&canvas, Rgba::WHITE) > 0,
            "{size}px icon must contain white glyph pixels"
        );
    }

    // At 32px the dot lands two pixels above center
    let canvas = IconBadge::new(32).render().unwrap();
    assert_eq!(canvas.get_pixel(16, 14), Some(Rgba::WHITE));
}

// ============================================================================
// Scenario: 16px icon
// ============================================================================

/// 16px: transparent corners, orange-then-gold concentric disks, white glyph
/// pixels near center, no clock elements.
#[test]
fn scenario_smallest_icon() {
    let canvas = IconBadge::new(16).render().unwrap();

    // Transparent corners
    assert_eq!(canvas.get_pixel(0, 0), Some(Rgba::TRANSPARENT));
    assert_eq!(canvas.get_pixel(15, 0), Some(Rgba::TRANSPARENT));
    assert_eq!(canvas.get_pixel(0, 15), Some(Rgba::TRANSPARENT));
    assert_eq!(canvas.get_pixel(15, 15), Some(Rgba::TRANSPARENT));

    // Outer disk radius 7 (orange at the rim), inner radius 5 (gold inside)
    assert_eq!(canvas.get_pixel(15, 8), Some(BADGE_PRIMARY));
    assert_eq!(canvas.get_pixel(2, 8), Some(BADGE_PRIMARY));
    assert_eq!(canvas.get_pixel(12, 8), Some(BADGE_SECONDARY));

    // The degenerate checkmark and dot both collapse to white at center
    assert_eq!(canvas.get_pixel(8, 8), Some(Rgba::WHITE));

    // No clock at this size
    assert_eq!(count_matching(&canvas, CLOCK_FILL), 0);
}

// ============================================================================
// Scenario: 128px icon
// ============================================================================

/// 128px: full composition with the clock accent up-right of center.
#[test]
fn scenario_reference_icon() {
    let canvas = IconBadge::new(128).render().unwrap();

    // Two-tone disk, probed straight down from center away from the glyphs
    assert_eq!(canvas.get_pixel(64, 116), Some(BADGE_PRIMARY));
    assert_eq!(canvas.get_pixel(64, 109), Some(BADGE_SECONDARY));

    // Checkmark anchor points (span 38 around center)
    assert_eq!(canvas.get_pixel(53, 64), Some(Rgba::WHITE));
    assert_eq!(canvas.get_pixel(61, 69), Some(Rgba::WHITE));
    assert_eq!(canvas.get_pixel(71, 75), Some(Rgba::WHITE));

    // Clock face at (89, 39), radius 32: semi-transparent fill kept verbatim
    assert_eq!(canvas.get_pixel(89, 39), Some(CLOCK_FILL));
    assert_eq!(canvas.get_pixel(99, 49), Some(CLOCK_FILL));

    // White ring at the clock's rightmost extent, hands at 12 and 3
    assert_eq!(canvas.get_pixel(121, 39), Some(Rgba::WHITE));
    assert_eq!(canvas.get_pixel(89, 25), Some(Rgba::WHITE));
    assert_eq!(canvas.get_pixel(103, 39), Some(Rgba::WHITE));
}
