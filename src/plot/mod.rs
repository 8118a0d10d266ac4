//! Terminal rendering of saved quantile records
//!
//! Draws the median trajectory as a line of full blocks with the
//! interquartile band shaded behind it, on a fixed vertical extent just
//! past the clamp range of the simulation.

use crate::io::SummaryRecord;

/// Vertical extent of every chart, slightly past the parameter clamp range
pub const Y_MIN: f64 = -1.05;
/// See [`Y_MIN`]
pub const Y_MAX: f64 = 1.05;

const MEDIAN_CELL: char = '█';
const BAND_CELL: char = '░';
const GUTTER: usize = 6;

/// Render a record as a fixed-range band chart
///
/// Columns are checkpoints (subsampled to `width` when there are more),
/// rows span [`Y_MIN`, `Y_MAX`] top to bottom. Values outside the extent
/// are clipped onto the edge rows; non-finite values leave their cells
/// blank. The x-axis runs from the first to the last checkpoint step.
pub fn band_chart(record: &SummaryRecord, width: usize, height: usize) -> String {
    if record.is_empty() || width == 0 || height == 0 {
        return String::new();
    }

    let len = record.len();
    let cols = len.min(width);
    let col_index = |c: usize| -> usize {
        if len > cols {
            let step = len as f64 / cols as f64;
            ((c as f64 * step) as usize).min(len - 1)
        } else {
            c
        }
    };

    let row_of = |v: f64| -> Option<usize> {
        if !v.is_finite() {
            return None;
        }
        let normalized = (Y_MAX - v.clamp(Y_MIN, Y_MAX)) / (Y_MAX - Y_MIN);
        Some(((normalized * (height - 1) as f64).round() as usize).min(height - 1))
    };

    let mut grid = vec![vec![' '; cols]; height];
    for c in 0..cols {
        let j = col_index(c);
        // high sits above low, so its row index is the smaller one
        if let (Some(top), Some(bottom)) = (row_of(record.high[j]), row_of(record.low[j])) {
            for row in &mut grid[top..=bottom] {
                row[c] = BAND_CELL;
            }
        }
        if let Some(r) = row_of(record.median[j]) {
            grid[r][c] = MEDIAN_CELL;
        }
    }

    let mut out = String::new();
    for (r, row) in grid.iter().enumerate() {
        if r == 0 {
            out.push_str(&format!("{Y_MAX:>5.2}"));
        } else if r == height - 1 {
            out.push_str(&format!("{Y_MIN:>5.2}"));
        } else {
            out.push_str(&" ".repeat(5));
        }
        out.push('┤');
        out.extend(row.iter());
        out.push('\n');
    }

    out.push_str(&" ".repeat(5));
    out.push('└');
    out.push_str(&"─".repeat(cols));
    out.push('\n');

    let axis = record.step_axis();
    out.push_str(&format!(
        "{}step {} … {}\n",
        " ".repeat(GUTTER),
        axis[0],
        axis[axis.len() - 1]
    ));
    out
}
