//! Grid and world-space geometry.
//!
//! Two coordinate spaces meet here:
//! - **Cell space**: integer `CellCoord`s addressing grid cells, grouped
//!   into rectangular `CellBounds`.
//! - **World space**: `f32` positions (`Vec2`) and axis-aligned boxes
//!   (`Rect`) used for overlap tests against colliders.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A 2D world-space vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    /// The `(1, 1)` vector.
    pub const ONE: Vec2 = Vec2::new(1.0, 1.0);

    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check that both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Integer grid coordinate.
///
/// Ordering is lexicographic on `(x, y)`, which is the iteration order
/// of the tile registry.
///
/// Arithmetic saturates at the `i32` range instead of overflowing, so
/// cells near the limits clamp to the edge rather than wrap.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    /// The `(0, 0)` cell.
    pub const ZERO: CellCoord = CellCoord::new(0, 0);

    /// Create a new cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if both components are zero.
    ///
    /// Used when a coordinate is interpreted as an offset.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for CellCoord {
    type Output = CellCoord;

    fn add(self, rhs: CellCoord) -> CellCoord {
        CellCoord::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for CellCoord {
    type Output = CellCoord;

    fn sub(self, rhs: CellCoord) -> CellCoord {
        CellCoord::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Neg for CellCoord {
    type Output = CellCoord;

    fn neg(self) -> CellCoord {
        CellCoord::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

/// Rectangular block of cells: `origin` is the lowest corner, `width` and
/// `height` count cells.
///
/// Cells inside the block are addressed either absolutely or locally
/// (relative to `origin`, so local cells range over `0..width` and
/// `0..height`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellBounds {
    pub origin: CellCoord,
    pub width: u32,
    pub height: u32,
}

impl CellBounds {
    /// Create bounds from an origin and a size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: CellCoord::new(x, y),
            width,
            height,
        }
    }

    /// Smallest bounds covering both corners (inclusive).
    #[must_use]
    pub fn from_corners(a: CellCoord, b: CellCoord) -> Self {
        let min = CellCoord::new(a.x.min(b.x), a.y.min(b.y));
        let max = CellCoord::new(a.x.max(b.x), a.y.max(b.y));
        Self {
            origin: min,
            width: max.x.abs_diff(min.x).saturating_add(1),
            height: max.y.abs_diff(min.y).saturating_add(1),
        }
    }

    /// Number of cells covered.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if the bounds cover no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive upper corner, clamped to `i32::MAX`.
    #[must_use]
    pub fn end(&self) -> CellCoord {
        CellCoord::new(
            self.origin.x.saturating_add_unsigned(self.width),
            self.origin.y.saturating_add_unsigned(self.height),
        )
    }

    /// Check if an absolute cell lies inside the bounds.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        let end = self.end();
        cell.x >= self.origin.x && cell.y >= self.origin.y && cell.x < end.x && cell.y < end.y
    }

    /// Check if a local cell lies inside the bounds.
    #[must_use]
    pub fn contains_local(&self, local: CellCoord) -> bool {
        local.x >= 0
            && local.y >= 0
            && (local.x as u32) < self.width
            && (local.y as u32) < self.height
    }

    /// Convert a local cell to an absolute one.
    #[must_use]
    pub fn to_absolute(&self, local: CellCoord) -> CellCoord {
        local + self.origin
    }

    /// Convert an absolute cell to a local one.
    #[must_use]
    pub fn to_local(&self, cell: CellCoord) -> CellCoord {
        cell - self.origin
    }

    /// Row-major index of a local cell in a dense `width * height` block.
    #[must_use]
    pub fn index_of(&self, local: CellCoord) -> Option<usize> {
        if !self.contains_local(local) {
            return None;
        }
        Some(local.x as usize + local.y as usize * self.width as usize)
    }

    /// Smallest bounds covering `self` and `cell`.
    #[must_use]
    pub fn expanded_to(&self, cell: CellCoord) -> Self {
        if self.is_empty() {
            return Self::new(cell.x, cell.y, 1, 1);
        }
        let end = self.end();
        Self::from_corners(
            CellCoord::new(self.origin.x.min(cell.x), self.origin.y.min(cell.y)),
            CellCoord::new((end.x - 1).max(cell.x), (end.y - 1).max(cell.y)),
        )
    }

    /// Iterate local cells, column by column (`x` outer, `y` inner).
    ///
    /// Local coordinates are `i32`, so sizes past `i32::MAX` are clamped.
    pub fn local_cells(&self) -> impl Iterator<Item = CellCoord> {
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);
        (0..width).flat_map(move |x| (0..height).map(move |y| CellCoord::new(x, y)))
    }
}

impl std::fmt::Display for CellBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}x{})",
            self.origin.x, self.origin.y, self.width, self.height
        )
    }
}

/// Axis-aligned world-space box given by its center and full size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// Create a box from its center and full size.
    #[must_use]
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Create a box from its lower and upper corners.
    #[must_use]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        let size = max - min;
        Self {
            center: Vec2::new(min.x + size.x * 0.5, min.y + size.y * 0.5),
            size,
        }
    }

    /// Lower corner.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        Vec2::new(
            self.center.x - self.size.x * 0.5,
            self.center.y - self.size.y * 0.5,
        )
    }

    /// Upper corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        Vec2::new(
            self.center.x + self.size.x * 0.5,
            self.center.y + self.size.y * 0.5,
        )
    }

    /// Closed-interval overlap test: boxes that only touch on an edge
    /// intersect.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x <= b_max.x && a_max.x >= b_min.x && a_min.y <= b_max.y && a_max.y >= b_min.y
    }

    /// Check if a point lies inside the box (edges included).
    #[must_use]
    pub fn contains_point(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_coord_ordering() {
        let mut cells = vec![
            CellCoord::new(1, 0),
            CellCoord::new(0, 2),
            CellCoord::new(0, 1),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![CellCoord::new(0, 1), CellCoord::new(0, 2), CellCoord::new(1, 0)]
        );
        assert_eq!(format!("{}", CellCoord::new(3, -1)), "3:-1");
    }

    #[test]
    fn test_bounds_local_absolute() {
        let bounds = CellBounds::new(-2, 3, 4, 2);
        assert_eq!(bounds.area(), 8);
        assert_eq!(bounds.end(), CellCoord::new(2, 5));

        let local = CellCoord::new(1, 1);
        let abs = bounds.to_absolute(local);
        assert_eq!(abs, CellCoord::new(-1, 4));
        assert_eq!(bounds.to_local(abs), local);

        assert!(bounds.contains(abs));
        assert!(!bounds.contains(CellCoord::new(2, 3)));
        assert!(bounds.contains_local(CellCoord::new(3, 1)));
        assert!(!bounds.contains_local(CellCoord::new(4, 0)));
        assert!(!bounds.contains_local(CellCoord::new(-1, 0)));
    }

    #[test]
    fn test_bounds_index_of() {
        let bounds = CellBounds::new(0, 0, 3, 2);
        assert_eq!(bounds.index_of(CellCoord::new(0, 0)), Some(0));
        assert_eq!(bounds.index_of(CellCoord::new(2, 0)), Some(2));
        assert_eq!(bounds.index_of(CellCoord::new(1, 1)), Some(4));
        assert_eq!(bounds.index_of(CellCoord::new(3, 1)), None);
    }

    #[test]
    fn test_bounds_local_cells_order() {
        let bounds = CellBounds::new(5, 5, 2, 2);
        let cells: Vec<_> = bounds.local_cells().collect();
        assert_eq!(
            cells,
            vec![
                CellCoord::new(0, 0),
                CellCoord::new(0, 1),
                CellCoord::new(1, 0),
                CellCoord::new(1, 1),
            ]
        );
        assert_eq!(CellBounds::default().local_cells().count(), 0);
    }

    #[test]
    fn test_bounds_expanded_to() {
        let bounds = CellBounds::new(0, 0, 2, 2);
        let grown = bounds.expanded_to(CellCoord::new(-1, 3));
        assert_eq!(grown, CellBounds::new(-1, 0, 3, 4));

        // Already inside: unchanged
        assert_eq!(bounds.expanded_to(CellCoord::new(1, 1)), bounds);

        // Empty bounds collapse onto the cell
        let empty = CellBounds::default();
        assert_eq!(empty.expanded_to(CellCoord::new(4, 4)), CellBounds::new(4, 4, 1, 1));
    }

    #[test]
    fn test_cell_arithmetic_saturates() {
        let max = CellCoord::new(i32::MAX, i32::MAX);
        let min = CellCoord::new(i32::MIN, i32::MIN);
        assert_eq!(max + CellCoord::new(1, 1), max);
        assert_eq!(min - CellCoord::new(1, 1), min);
        assert_eq!(-min, max);
    }

    #[test]
    fn test_bounds_near_limits() {
        let bounds = CellBounds::new(i32::MAX - 1, 0, u32::MAX, 2);
        assert_eq!(bounds.end(), CellCoord::new(i32::MAX, 2));
        assert!(bounds.contains(CellCoord::new(i32::MAX - 1, 1)));

        let full = CellBounds::from_corners(CellCoord::new(i32::MIN, 0), CellCoord::new(i32::MAX, 0));
        assert_eq!(full.width, u32::MAX);
        assert_eq!(full.height, 1);

        let flat = CellBounds::new(0, 0, 0, u32::MAX);
        assert_eq!(flat.local_cells().count(), 0);
        let tall = CellBounds::new(0, 0, 1, u32::MAX);
        assert_eq!(tall.local_cells().nth(3), Some(CellCoord::new(0, 3)));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(Vec2::ZERO, Vec2::ONE);
        let b = Rect::new(Vec2::new(0.75, 0.0), Vec2::ONE);
        let c = Rect::new(Vec2::new(3.0, 0.0), Vec2::ONE);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_rect_touching_edges_intersect() {
        let a = Rect::new(Vec2::ZERO, Vec2::ONE);
        let b = Rect::new(Vec2::new(1.0, 0.0), Vec2::ONE);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_rect_min_max() {
        let rect = Rect::from_min_max(Vec2::new(1.0, 2.0), Vec2::new(3.0, 6.0));
        assert_eq!(rect.center, Vec2::new(2.0, 4.0));
        assert_eq!(rect.size, Vec2::new(2.0, 4.0));
        assert_eq!(rect.min(), Vec2::new(1.0, 2.0));
        assert_eq!(rect.max(), Vec2::new(3.0, 6.0));
        assert!(rect.contains_point(Vec2::new(3.0, 6.0)));
        assert!(!rect.contains_point(Vec2::new(3.1, 6.0)));
    }
}
