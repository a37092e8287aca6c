use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::Coordinate;

/// How one plant entry was laid out on the display grid.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub id: String,
    pub quantity: u32,
    pub cells_needed: usize,
    pub cells_placed: usize,
    /// First occupied cell; absent when nothing was placed.
    pub start: Option<Coordinate>,
}

impl Placement {
    pub fn is_truncated(&self) -> bool {
        self.cells_placed < self.cells_needed
    }
}

/// Bed preview: at most 10×10 cells, each empty or labeled with a plant id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PackedGrid {
    pub rows: usize,
    pub cols: usize,
    /// Actual bed area in squares, before the display cap.
    pub bed_area: u64,
    pub cells: Vec<Vec<Option<String>>>,
    pub placements: Vec<Placement>,
    /// Plant ids with no library entry; they take no cells.
    pub skipped: Vec<String>,
    /// True when at least one plant did not get all the cells it needed.
    pub truncated: bool,
}

impl PackedGrid {
    pub fn empty(rows: usize, cols: usize, bed_area: u64) -> Self {
        Self {
            rows,
            cols,
            bed_area,
            cells: vec![vec![None; cols]; rows],
            placements: Vec::new(),
            skipped: Vec::new(),
            truncated: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|r| r.iter())
            .filter(|c| c.is_some())
            .count()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col)?.as_deref()
    }

    /// Number of cells labeled with `id`.
    pub fn count_of(&self, id: &str) -> usize {
        self.cells
            .iter()
            .flat_map(|r| r.iter())
            .filter(|c| c.as_deref() == Some(id))
            .count()
    }
}
