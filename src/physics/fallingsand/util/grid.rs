//! A simple 2d grid type
//! Backed by an ndarray in row major order, so that a row of the board is
//! contiguous in memory and the sweep walks it without jumping around.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt;

use super::vectors::CellVector;

/// A simple 2d grid type
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T>(ndarray::Array2<T>);

/* =================
 * Initialization
 * ================= */
impl<T> Grid<T> {
    /// Create a new grid filled with one value
    pub fn new_fill(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self(ndarray::Array2::from_elem((height, width), value))
    }
    /// Create a new grid with the given width and height, and fill it with the given data
    /// The data is read one row at a time, top row first
    /// Errors if the data does not have exactly width * height items
    pub fn new_from_vec(
        width: usize,
        height: usize,
        data: Vec<T>,
    ) -> Result<Self, GridShapeError> {
        let len = data.len();
        ndarray::Array2::from_shape_vec((height, width), data)
            .map(Self)
            .map_err(|_| GridShapeError {
                width,
                height,
                len,
            })
    }
    /// Create a new grid with the given width and height, and fill it with default values
    pub fn new_empty(width: usize, height: usize) -> Self
    where
        T: Default,
    {
        Self(ndarray::Array2::from_shape_simple_fn(
            (height, width),
            Default::default,
        ))
    }
}

/* ======================================
 * Simple Getters
 * Access basic attributes of the struct
 * ====================================== */
impl<T> Grid<T> {
    /// Get the width of the grid
    pub fn get_width(&self) -> usize {
        self.0.ncols()
    }
    /// Get the height of the grid
    pub fn get_height(&self) -> usize {
        self.0.nrows()
    }
    /// Get the total size of the grid
    pub fn total_size(&self) -> usize {
        self.0.len()
    }
    /// Get the data as an ndarray
    pub fn get_data(&self) -> &ndarray::Array2<T> {
        &self.0
    }
}

/// Defines when the user has simply exceeded the bounds of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOutOfBoundsError(pub CellVector);
impl fmt::Display for GridOutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} went outside the constraints of grid", self.0)
    }
}
impl std::error::Error for GridOutOfBoundsError {}

/// Defines when the data handed to a grid does not match its dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridShapeError {
    /// Requested width
    pub width: usize,
    /// Requested height
    pub height: usize,
    /// Number of items actually given
    pub len: usize,
}
impl fmt::Display for GridShapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "a {}x{} grid needs {} items but was given {}",
            self.width,
            self.height,
            self.width * self.height,
            self.len
        )
    }
}
impl std::error::Error for GridShapeError {}

/* ======================================
 * Position Based Getters
 * Access data at a position
 * ====================================== */
impl<T> Grid<T> {
    /// Gets the value at the given coordinate
    /// Panics if the coordinate is out of bounds, callers are expected to check first
    pub fn get(&self, idx: CellVector) -> &T {
        &self.0[Self::to_ndarray(idx)]
    }
    /// Gets the value at the given coordinate, or returns an error if the coordinate is out of bounds
    pub fn checked_get(&self, idx: CellVector) -> Result<&T, GridOutOfBoundsError> {
        self.0
            .get(Self::to_ndarray(idx))
            .ok_or(GridOutOfBoundsError(idx))
    }
    /// Gets the value at the given coordinate, mutably
    pub fn get_mut(&mut self, idx: CellVector) -> &mut T {
        &mut self.0[Self::to_ndarray(idx)]
    }
    /// Sets the value at the given coordinate, overwriting the old value
    pub fn set(&mut self, idx: CellVector, value: T) {
        self.replace(idx, value);
    }
    /// Like set, but gives you ownership of the original value
    pub fn replace(&mut self, idx: CellVector, replacement: T) -> T {
        std::mem::replace(self.get_mut(idx), replacement)
    }
    /// Overwrite every cell with the given value
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.0.fill(value);
    }
    /// Transforms the coordinate to the ndarray coordinate system
    fn to_ndarray(idx: CellVector) -> [usize; 2] {
        [idx.row, idx.col]
    }
}

/// Iteration
impl<T> Grid<T> {
    /// Get an iterator over the grid, one row at a time starting from the top
    pub fn iter(&self) -> ndarray::iter::Iter<'_, T, ndarray::Ix2> {
        self.0.iter()
    }

    /// Get a mutable iterator over the grid
    pub fn iter_mut(&mut self) -> ndarray::iter::IterMut<'_, T, ndarray::Ix2> {
        self.0.iter_mut()
    }

    /// Iterate over the grid along with the coordinate of every cell
    pub fn indexed_iter(&self) -> impl Iterator<Item = (CellVector, &T)> {
        self.0
            .indexed_iter()
            .map(|((row, col), value)| (CellVector { col, row }, value))
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = ndarray::iter::Iter<'a, T, ndarray::Ix2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = &'a mut T;
    type IntoIter = ndarray::iter::IterMut<'a, T, ndarray::Ix2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
