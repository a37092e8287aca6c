use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod bed;
pub mod grid;
pub mod plant;
pub mod request;
pub mod schedule;

/// A zero-based (row, col) position within the display grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    /// Position of the `index`-th cell when walking a grid `cols` wide in row-major order.
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }
}
