//! Squarified treemap tiling.
//!
//! Rows are grown while the worst aspect ratio keeps improving, then laid
//! out along the shorter side of the remaining space. The target aspect
//! is the golden ratio, which keeps cells readable for labels.

use serde::Serialize;

const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Shrink by `padding` on every side, collapsing to zero size rather
    /// than going negative.
    pub fn inset(&self, padding: f64) -> Self {
        let dx = padding.min(self.width / 2.0);
        let dy = padding.min(self.height / 2.0);
        Self::new(
            self.x + dx,
            self.y + dy,
            self.width - 2.0 * dx,
            self.height - 2.0 * dy,
        )
    }

    pub fn contains(&self, other: &LayoutRect) -> bool {
        const EPS: f64 = 1e-9;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.bottom() <= self.bottom() + EPS
    }
}

/// Tile `bounds` with one rectangle per weight, in input order.
///
/// Non-finite or negative weights are treated as zero and receive an
/// empty rectangle at the position where they would have been placed.
pub fn squarify(weights: &[f64], bounds: LayoutRect) -> Vec<LayoutRect> {
    let values: Vec<f64> = weights
        .iter()
        .map(|w| if w.is_finite() && *w > 0.0 { *w } else { 0.0 })
        .collect();
    let mut out = vec![LayoutRect::new(bounds.x, bounds.y, 0.0, 0.0); values.len()];
    let total: f64 = values.iter().sum();
    if values.is_empty() || total <= 0.0 || bounds.area() <= 0.0 {
        return out;
    }

    let (mut x0, mut y0) = (bounds.x, bounds.y);
    let (x1, y1) = (bounds.right(), bounds.bottom());
    let mut remaining = total;
    let n = values.len();
    let mut i0 = 0;

    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let mut i1 = i0;

        // Next non-empty value seeds the row.
        let mut sum = 0.0;
        while i1 < n {
            sum = values[i1];
            i1 += 1;
            if sum > 0.0 {
                break;
            }
        }
        if sum <= 0.0 {
            break;
        }

        let mut min_value = sum;
        let mut max_value = sum;
        let alpha = (dy / dx).max(dx / dy) / (remaining * GOLDEN_RATIO);
        let mut beta = sum * sum * alpha;
        let mut min_ratio = (max_value / beta).max(beta / min_value);

        while i1 < n {
            let value = values[i1];
            let grown = sum + value;
            let next_min = if value > 0.0 { min_value.min(value) } else { min_value };
            let next_max = max_value.max(value);
            beta = grown * grown * alpha;
            let ratio = (next_max / beta).max(beta / next_min);
            if ratio > min_ratio {
                break;
            }
            sum = grown;
            min_value = next_min;
            max_value = next_max;
            min_ratio = ratio;
            i1 += 1;
        }

        let row = i0..i1;
        if dx < dy {
            // Horizontal strip across the top of the remaining space.
            let row_height = if i1 == n { y1 - y0 } else { dy * sum / remaining };
            let mut cx = x0;
            for i in row {
                let w = if sum > 0.0 { dx * values[i] / sum } else { 0.0 };
                out[i] = LayoutRect::new(cx, y0, w, row_height);
                cx += w;
            }
            y0 += row_height;
        } else {
            // Vertical strip along the left edge.
            let row_width = if i1 == n { x1 - x0 } else { dx * sum / remaining };
            let mut cy = y0;
            for i in row {
                let h = if sum > 0.0 { dy * values[i] / sum } else { 0.0 };
                out[i] = LayoutRect::new(x0, cy, row_width, h);
                cy += h;
            }
            x0 += row_width;
        }

        remaining -= sum;
        i0 = i1;
    }

    out
}

/// Gap between sibling cells, split evenly between neighbours.
pub const PADDING_INNER: f64 = 2.0;

/// Squarify, then shrink every cell so siblings sit `padding` apart.
pub fn tile(weights: &[f64], bounds: LayoutRect, padding: f64) -> Vec<LayoutRect> {
    squarify(weights, bounds)
        .into_iter()
        .map(|rect| rect.inset(padding / 2.0))
        .collect()
}
