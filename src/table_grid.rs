//! Standardized-bound grid shared by the κ̄ and critical value tables.
//!
//! Tables are indexed by the standardized lower bound `c` (negative axis)
//! and upper bound `c̄` (positive axis). Lookups between nodes interpolate
//! bilinearly over the four surrounding nodes, either in `(c, c̄)` or in
//! reciprocal coordinates `(1/c, 1/c̄)`; lookups outside the grid clamp to the
//! nearest boundary node and never extrapolate.
//!
//! Quantities driven by κ̄ change roughly in proportion to the inverse bound
//! distance near the narrow corner, and the grid is densest there.

use crate::errors::{BoundedResult, BoundedTestError};

/// Number of nodes on each axis of the standard grid.
pub const GRID_NODES: usize = 9;

/// Tabulated values of the standardized lower bound `c`, ascending.
pub const LOWER_AXIS: [f64; GRID_NODES] = [-3.0, -2.0, -1.5, -1.0, -0.75, -0.6, -0.5, -0.35, -0.25];

/// Tabulated values of the standardized upper bound `c̄`, ascending.
pub const UPPER_AXIS: [f64; GRID_NODES] = [0.25, 0.35, 0.5, 0.6, 0.75, 1.0, 1.5, 2.0, 3.0];

/// Coordinate along which values are interpolated between nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    /// Linear in `c` and `c̄`
    Linear,
    /// Linear in `1/c` and `1/c̄`
    Reciprocal,
}

impl AxisScale {
    fn transform(self, x: f64) -> f64 {
        match self {
            AxisScale::Linear => x,
            AxisScale::Reciprocal => x.recip(),
        }
    }
}

/// Position of a query on one axis: two node indices and the weight of the upper one.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisPosition {
    lo: usize,
    hi: usize,
    weight: f64,
    clamped: bool,
}

fn locate_on_axis(axis: &[f64], x: f64, nan_index: usize, scale: AxisScale) -> AxisPosition {
    let last = axis.len() - 1;
    let at = |i: usize, clamped: bool| AxisPosition {
        lo: i,
        hi: i,
        weight: 0.0,
        clamped,
    };

    if x.is_nan() {
        return at(nan_index, true);
    }
    if x <= axis[0] {
        return at(0, x < axis[0]);
    }
    if x >= axis[last] {
        return at(last, x > axis[last]);
    }

    // first node strictly above x
    let hi = axis.partition_point(|&node| node <= x);
    let lo = hi - 1;
    if axis[lo] == x {
        return at(lo, false);
    }
    // nodes on one axis share a sign, so both scales are monotone between them
    let (x, lo_node, hi_node) = (scale.transform(x), scale.transform(axis[lo]), scale.transform(axis[hi]));
    AxisPosition {
        lo,
        hi,
        weight: (x - lo_node) / (hi_node - lo_node),
        clamped: false,
    }
}

/// Where a `(c, c̄)` query falls on a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLocation {
    row: AxisPosition,
    col: AxisPosition,
    /// The query lay outside the tabulated range on at least one axis
    pub clamped: bool,
    /// The query lay on the narrow side of the grid, where tabulated values
    /// are least reliable
    pub low_confidence: bool,
}

impl GridLocation {
    /// Bilinear interpolation of a node function `value(i, j)`.
    ///
    /// Exact node hits return the node value unchanged.
    pub fn interpolate<F>(&self, value: F) -> f64
    where
        F: Fn(usize, usize) -> f64,
    {
        let (r, c) = (&self.row, &self.col);
        let v00 = value(r.lo, c.lo);
        if r.lo == r.hi && c.lo == c.hi {
            return v00;
        }
        if r.lo == r.hi {
            return v00 + c.weight * (value(r.lo, c.hi) - v00);
        }
        if c.lo == c.hi {
            return v00 + r.weight * (value(r.hi, c.lo) - v00);
        }
        let v01 = value(r.lo, c.hi);
        let v10 = value(r.hi, c.lo);
        let v11 = value(r.hi, c.hi);
        (1.0 - r.weight) * ((1.0 - c.weight) * v00 + c.weight * v01)
            + r.weight * ((1.0 - c.weight) * v10 + c.weight * v11)
    }
}

/// A rectangular `(c, c̄)` grid.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundGrid {
    lower_axis: Vec<f64>,
    upper_axis: Vec<f64>,
}

impl Default for BoundGrid {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoundGrid {
    /// The grid the embedded tables are tabulated on.
    pub fn standard() -> Self {
        Self {
            lower_axis: LOWER_AXIS.to_vec(),
            upper_axis: UPPER_AXIS.to_vec(),
        }
    }

    /// Build a grid from ascending axes; `c` nodes must be negative and `c̄` nodes positive.
    pub fn new(lower_axis: Vec<f64>, upper_axis: Vec<f64>) -> BoundedResult<Self> {
        let ascending = |axis: &[f64]| axis.windows(2).all(|w| w[0] < w[1]);
        if !ascending(&lower_axis) || !ascending(&upper_axis) {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "grid axis".to_string(),
                value: f64::NAN,
                constraint: "strictly ascending".to_string(),
            });
        }
        if let Some(&bad) = lower_axis.iter().find(|c| !(**c < 0.0)) {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "lower grid node".to_string(),
                value: bad,
                constraint: "negative".to_string(),
            });
        }
        if let Some(&bad) = upper_axis.iter().find(|c| !(**c > 0.0)) {
            return Err(BoundedTestError::InvalidParameter {
                parameter: "upper grid node".to_string(),
                value: bad,
                constraint: "positive".to_string(),
            });
        }
        Ok(Self {
            lower_axis,
            upper_axis,
        })
    }

    /// Nodes of the `c` axis.
    pub fn lower_axis(&self) -> &[f64] {
        &self.lower_axis
    }

    /// Nodes of the `c̄` axis.
    pub fn upper_axis(&self) -> &[f64] {
        &self.upper_axis
    }

    /// Number of nodes as `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.lower_axis.len(), self.upper_axis.len())
    }

    /// Width `c̄ - c` of the narrowest tabulated pair.
    pub fn narrowest_width(&self) -> f64 {
        match (self.lower_axis.last(), self.upper_axis.first()) {
            (Some(c), Some(c_bar)) => c_bar - c,
            _ => 0.0,
        }
    }

    /// Locate `(c, c̄)` on the grid, with interpolation weights taken along `scale`.
    ///
    /// NaN coordinates are treated as lying beyond the wide end of the axis.
    pub fn locate(&self, c: f64, c_bar: f64, scale: AxisScale, table: &str) -> BoundedResult<GridLocation> {
        if self.lower_axis.is_empty() || self.upper_axis.is_empty() {
            return Err(BoundedTestError::TableLookupError {
                table: table.to_string(),
            });
        }

        let row = locate_on_axis(&self.lower_axis, c, 0, scale);
        let col = locate_on_axis(&self.upper_axis, c_bar, self.upper_axis.len() - 1, scale);

        let narrow_lower = c > self.lower_axis[self.lower_axis.len() - 1];
        let narrow_upper = c_bar < self.upper_axis[0];
        let too_narrow = (c_bar - c) < self.narrowest_width();

        Ok(GridLocation {
            row,
            col,
            clamped: row.clamped || col.clamped,
            low_confidence: narrow_lower || narrow_upper || too_narrow,
        })
    }
}
