//! Shape rasterization for the procedural base styles.
//!
//! All helpers clip against the buffer bounds, so shape coordinates may
//! legally fall outside the canvas. Buffers are expected to be RGB.

use crate::buffer::PixelBuffer;

/// Clamp an inclusive coordinate span to [0, extent). The result may be
/// empty (lo > hi), which callers iterate as a no-op.
#[inline]
fn clip_span(lo: i64, hi: i64, extent: u32) -> (i64, i64) {
    (lo.max(0), hi.min(extent as i64 - 1))
}

/// Fill an axis-aligned rectangle given inclusive corners.
pub(crate) fn fill_rect(buf: &mut PixelBuffer, x1: i64, y1: i64, x2: i64, y2: i64, color: [u8; 3]) {
    let (cx1, cx2) = clip_span(x1, x2, buf.width());
    let (cy1, cy2) = clip_span(y1, y2, buf.height());
    for y in cy1..=cy2 {
        for x in cx1..=cx2 {
            buf.set(x as u32, y as u32, &color);
        }
    }
}

/// Stroke the border of an axis-aligned rectangle.
pub(crate) fn outline_rect(
    buf: &mut PixelBuffer,
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
    color: [u8; 3],
    stroke: u32,
) {
    let s = i64::from(stroke);
    fill_rect(buf, x1, y1, x2, (y1 + s - 1).min(y2), color);
    fill_rect(buf, x1, (y2 - s + 1).max(y1), x2, y2, color);
    fill_rect(buf, x1, y1, (x1 + s - 1).min(x2), y2, color);
    fill_rect(buf, (x2 - s + 1).max(x1), y1, x2, y2, color);
}

/// Fill the ellipse inscribed in an inclusive bounding box.
pub(crate) fn fill_ellipse(
    buf: &mut PixelBuffer,
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
    color: [u8; 3],
) {
    let cx = (x1 + x2) as f64 / 2.0;
    let cy = (y1 + y2) as f64 / 2.0;
    let rx = (x2 - x1) as f64 / 2.0;
    let ry = (y2 - y1) as f64 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        // Degenerate box: a bar or a point.
        fill_rect(buf, x1, y1, x2, y2, color);
        return;
    }

    let (cx1, cx2) = clip_span(x1, x2, buf.width());
    let (cy1, cy2) = clip_span(y1, y2, buf.height());
    for y in cy1..=cy2 {
        for x in cx1..=cx2 {
            let dx = (x as f64 - cx) / rx;
            let dy = (y as f64 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                buf.set(x as u32, y as u32, &color);
            }
        }
    }
}

/// Stroke the ellipse inscribed in an inclusive bounding box.
pub(crate) fn outline_ellipse(
    buf: &mut PixelBuffer,
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
    color: [u8; 3],
    stroke: u32,
) {
    let cx = (x1 + x2) as f64 / 2.0;
    let cy = (y1 + y2) as f64 / 2.0;
    let rx = (x2 - x1) as f64 / 2.0;
    let ry = (y2 - y1) as f64 / 2.0;
    let s = f64::from(stroke);
    if rx <= s || ry <= s {
        fill_ellipse(buf, x1, y1, x2, y2, color);
        return;
    }
    let irx = rx - s;
    let iry = ry - s;

    let (cx1, cx2) = clip_span(x1, x2, buf.width());
    let (cy1, cy2) = clip_span(y1, y2, buf.height());
    for y in cy1..=cy2 {
        for x in cx1..=cx2 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let outer = (dx / rx).powi(2) + (dy / ry).powi(2);
            let inner = (dx / irx).powi(2) + (dy / iry).powi(2);
            if outer <= 1.0 && inner > 1.0 {
                buf.set(x as u32, y as u32, &color);
            }
        }
    }
}

/// Stroke a circle ring of the given radius and stroke width.
pub(crate) fn outline_circle(
    buf: &mut PixelBuffer,
    cx: i64,
    cy: i64,
    radius: u32,
    color: [u8; 3],
    stroke: u32,
) {
    let r = f64::from(radius);
    let inner = f64::from(radius.saturating_sub(stroke));
    let ri = i64::from(radius);

    let (x_lo, x_hi) = clip_span(cx - ri, cx + ri, buf.width());
    let (y_lo, y_hi) = clip_span(cy - ri, cy + ri, buf.height());
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let dx = (x - cx) as f64;
            let dy = (y - cy) as f64;
            let d2 = dx * dx + dy * dy;
            if d2 <= r * r && d2 >= inner * inner {
                buf.set(x as u32, y as u32, &color);
            }
        }
    }
}

/// Draw a straight line segment with round caps.
pub(crate) fn draw_line(
    buf: &mut PixelBuffer,
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
    color: [u8; 3],
    width: u32,
) {
    let steps = (x2 - x1).abs().max((y2 - y1).abs()).max(1);
    let r = f64::from(width) / 2.0;
    for t in 0..=steps {
        let f = t as f64 / steps as f64;
        let px = x1 as f64 + (x2 - x1) as f64 * f;
        let py = y1 as f64 + (y2 - y1) as f64 * f;
        stamp_disc(buf, px, py, r, color);
    }
}

fn stamp_disc(buf: &mut PixelBuffer, cx: f64, cy: f64, r: f64, color: [u8; 3]) {
    let (x_lo, x_hi) = clip_span((cx - r).floor() as i64, (cx + r).ceil() as i64, buf.width());
    let (y_lo, y_hi) = clip_span((cy - r).floor() as i64, (cy + r).ceil() as i64, buf.height());
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if dx * dx + dy * dy <= r * r {
                buf.set(x as u32, y as u32, &color);
            }
        }
    }
}

/// Fill a polygon using even-odd scanline coverage at pixel centers.
pub(crate) fn fill_polygon(buf: &mut PixelBuffer, points: &[(i64, i64)], color: [u8; 3]) {
    if points.len() < 3 {
        return;
    }
    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
    let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);
    let (y_lo, y_hi) = clip_span(min_y, max_y, buf.height());

    let mut xs: Vec<f64> = Vec::new();
    for y in y_lo..=y_hi {
        let yc = y as f64 + 0.5;
        xs.clear();
        for i in 0..points.len() {
            let (px, py) = points[i];
            let (qx, qy) = points[(i + 1) % points.len()];
            let (py, qy) = (py as f64, qy as f64);
            if (py <= yc && qy > yc) || (qy <= yc && py > yc) {
                let t = (yc - py) / (qy - py);
                xs.push(px as f64 + t * (qx - px) as f64);
            }
        }
        xs.sort_by(|a, b| a.total_cmp(b));
        for pair in xs.chunks_exact(2) {
            let x_start = (pair[0] - 0.5).ceil() as i64;
            let x_end = (pair[1] - 0.5).floor() as i64;
            let (cx1, cx2) = clip_span(x_start, x_end, buf.width());
            for x in cx1..=cx2 {
                buf.set(x as u32, y as u32, &color);
            }
        }
    }
}

/// Stroke a closed polygon edge by edge.
pub(crate) fn outline_polygon(
    buf: &mut PixelBuffer,
    points: &[(i64, i64)],
    color: [u8; 3],
    stroke: u32,
) {
    if points.len() < 2 {
        return;
    }
    for i in 0..points.len() {
        let (x1, y1) = points[i];
        let (x2, y2) = points[(i + 1) % points.len()];
        draw_line(buf, x1, y1, x2, y2, color, stroke);
    }
}
