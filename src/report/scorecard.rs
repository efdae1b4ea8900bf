//! Scorecard PNG export — the downloadable score summary.
//!
//! Renders the circular score indicator off-screen with the `image` crate.
//! Geometry matches the on-page ring (radius 54, sweep proportional to the
//! score, clockwise from 12 o'clock).

use std::path::Path;

use image::{Rgba, RgbaImage};

use super::{Report, SCORE_RING_RADIUS};

/// Output image is square, this many pixels per side.
pub const SCORECARD_SIZE: u32 = 160;

/// Ring stroke width.
const RING_STROKE: f64 = 12.0;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TRACK: Rgba<u8> = Rgba([229, 231, 235, 255]);
const FILL_HIGH: Rgba<u8> = Rgba([34, 197, 94, 255]);
const FILL_MID: Rgba<u8> = Rgba([245, 158, 11, 255]);
const FILL_LOW: Rgba<u8> = Rgba([239, 68, 68, 255]);

fn fill_color(pct: f64) -> Rgba<u8> {
    if pct >= super::BADGE_THRESHOLD {
        FILL_HIGH
    } else if pct >= 50.0 {
        FILL_MID
    } else {
        FILL_LOW
    }
}

/// Render the score ring for a report.
pub fn render(report: &Report) -> RgbaImage {
    let center = SCORECARD_SIZE as f64 / 2.0;
    let sweep = (report.readiness_percentage / 100.0) * std::f64::consts::TAU;
    let fill = fill_color(report.readiness_percentage);

    let mut img = RgbaImage::from_pixel(SCORECARD_SIZE, SCORECARD_SIZE, BACKGROUND);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f64 + 0.5 - center;
        let dy = y as f64 + 0.5 - center;
        let dist = (dx * dx + dy * dy).sqrt();
        if (dist - SCORE_RING_RADIUS).abs() > RING_STROKE / 2.0 {
            continue;
        }
        // Angle measured clockwise from 12 o'clock.
        let mut angle = dx.atan2(-dy);
        if angle < 0.0 {
            angle += std::f64::consts::TAU;
        }
        *pixel = if sweep > 0.0 && angle <= sweep {
            fill
        } else {
            TRACK
        };
    }
    img
}

/// Render and write the scorecard PNG to `path`.
pub fn save(report: &Report, path: &Path) -> anyhow::Result<()> {
    render(report)
        .save(path)
        .map_err(|e| anyhow::anyhow!("Failed to write scorecard to {}: {e}", path.display()))
}
