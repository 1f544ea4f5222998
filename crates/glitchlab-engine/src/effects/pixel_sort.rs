//! Brightness-keyed pixel sorting.

use crate::buffer::PixelBuffer;

use super::Direction;

/// Sort runs of dark pixels within each row or column.
///
/// Per lane, pixels whose brightness (mean of all channel samples) falls
/// strictly below `threshold` form maximal contiguous runs; each run is
/// reordered by ascending brightness, or descending when `reverse` is set.
/// Pixels at or above the threshold never move, and a run touching the lane
/// boundary is still sorted up to the boundary.
pub fn pixel_sort(
    buffer: &PixelBuffer,
    threshold: u8,
    direction: Direction,
    reverse: bool,
) -> PixelBuffer {
    let mut out = buffer.clone();
    let limit = f64::from(threshold);
    let c = buffer.channel_count();

    match direction {
        Direction::Horizontal => {
            for y in 0..buffer.height() {
                let mut lane: Vec<(f64, [u8; 4])> = (0..buffer.width())
                    .map(|x| (buffer.brightness(x, y), pixel_array(buffer, x, y)))
                    .collect();
                sort_dark_runs(&mut lane, limit, reverse);
                for (x, (_, px)) in lane.iter().enumerate() {
                    out.set(x as u32, y, &px[..c]);
                }
            }
        }
        Direction::Vertical => {
            for x in 0..buffer.width() {
                let mut lane: Vec<(f64, [u8; 4])> = (0..buffer.height())
                    .map(|y| (buffer.brightness(x, y), pixel_array(buffer, x, y)))
                    .collect();
                sort_dark_runs(&mut lane, limit, reverse);
                for (y, (_, px)) in lane.iter().enumerate() {
                    out.set(x, y as u32, &px[..c]);
                }
            }
        }
    }

    out
}

#[inline]
fn pixel_array(buffer: &PixelBuffer, x: u32, y: u32) -> [u8; 4] {
    let px = buffer.get(x, y);
    let mut out = [0u8; 4];
    out[..px.len()].copy_from_slice(px);
    out
}

/// Sort each maximal run of entries with brightness below `limit`.
///
/// The sweep carries one index past the end of the lane so a run that ends
/// at the boundary is flushed like any other.
fn sort_dark_runs(lane: &mut [(f64, [u8; 4])], limit: f64, reverse: bool) {
    let n = lane.len();
    let mut run_start: Option<usize> = None;
    for i in 0..=n {
        let dark = i < n && lane[i].0 < limit;
        if dark {
            run_start.get_or_insert(i);
        } else if let Some(start) = run_start.take() {
            let run = &mut lane[start..i];
            if reverse {
                run.sort_by(|a, b| b.0.total_cmp(&a.0));
            } else {
                run.sort_by(|a, b| a.0.total_cmp(&b.0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Channels;

    fn gray_row(values: &[u8]) -> PixelBuffer {
        let mut data = Vec::new();
        for &v in values {
            data.extend_from_slice(&[v, v, v]);
        }
        PixelBuffer::from_vec(values.len() as u32, 1, Channels::Rgb, data)
    }

    fn row_values(buf: &PixelBuffer) -> Vec<u8> {
        (0..buf.width()).map(|x| buf.get(x, 0)[0]).collect()
    }

    #[test]
    fn test_sorted_row_is_a_no_op() {
        let buf = gray_row(&[10, 20, 30, 40]);
        let out = pixel_sort(&buf, 100, Direction::Horizontal, false);
        assert_eq!(out, buf);
    }

    #[test]
    fn test_bright_pixels_never_move() {
        let buf = gray_row(&[30, 10, 200, 50, 40]);
        let out = pixel_sort(&buf, 100, Direction::Horizontal, false);
        assert_eq!(row_values(&out), vec![10, 30, 200, 40, 50]);
    }

    #[test]
    fn test_trailing_run_is_sorted() {
        let buf = gray_row(&[200, 50, 10]);
        let out = pixel_sort(&buf, 100, Direction::Horizontal, false);
        assert_eq!(row_values(&out), vec![200, 10, 50]);
    }

    #[test]
    fn test_reverse_sorts_descending() {
        let buf = gray_row(&[30, 10, 50, 200]);
        let out = pixel_sort(&buf, 100, Direction::Horizontal, true);
        assert_eq!(row_values(&out), vec![50, 30, 10, 200]);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Brightness exactly at the threshold stays put.
        let buf = gray_row(&[100, 10]);
        let out = pixel_sort(&buf, 100, Direction::Horizontal, false);
        assert_eq!(row_values(&out), vec![100, 10]);
    }

    #[test]
    fn test_vertical_sorts_columns() {
        let mut buf = PixelBuffer::new(1, 3, Channels::Rgb);
        buf.set(0, 0, &[50, 50, 50]);
        buf.set(0, 1, &[10, 10, 10]);
        buf.set(0, 2, &[30, 30, 30]);
        let out = pixel_sort(&buf, 100, Direction::Vertical, false);
        assert_eq!(out.get(0, 0), &[10, 10, 10]);
        assert_eq!(out.get(0, 1), &[30, 30, 30]);
        assert_eq!(out.get(0, 2), &[50, 50, 50]);
    }

    #[test]
    fn test_rgba_pixels_move_whole() {
        // Alpha participates in brightness and travels with its pixel.
        let mut buf = PixelBuffer::new(2, 1, Channels::Rgba);
        buf.set(0, 0, &[40, 40, 40, 40]);
        buf.set(1, 0, &[10, 10, 10, 10]);
        let out = pixel_sort(&buf, 200, Direction::Horizontal, false);
        assert_eq!(out.get(0, 0), &[10, 10, 10, 10]);
        assert_eq!(out.get(1, 0), &[40, 40, 40, 40]);
    }
}
