use log::debug;

use crate::models::{
    bed::{BedDimensions, PlantEntry},
    grid::{PackedGrid, Placement},
    plant::PlantLibrary,
    Coordinate,
};

/// Largest number of rows or columns drawn in a bed preview.
pub const MAX_DISPLAY_SIDE: u32 = 10;

/// Products closer than this to an integer are rounded to it before taking the ceiling.
const CEIL_TOLERANCE: f64 = 1e-9;

/// Cells one plant entry needs: `ceil(quantity × squares_per_plant)`,
/// saturating at `usize::MAX` when the product overflows.
pub fn cells_needed(quantity: u32, squares_per_plant: f64) -> usize {
    let area = f64::from(quantity) * squares_per_plant;
    if area.is_nan() || area <= 0.0 {
        return 0;
    }
    if area.is_infinite() {
        return usize::MAX;
    }
    (area - CEIL_TOLERANCE).ceil().max(0.0) as usize
}

/// Lays plants out on the bed preview.
///
/// The preview is the bed clamped to 10×10. Plants are taken in input order
/// and each fills `cells_needed` consecutive cells in row-major order from
/// the next free cell. Once the preview is full, remaining plants place
/// nothing; overflow is truncated without error. Plants missing from the
/// library are skipped.
pub fn pack_bed(dims: BedDimensions, plants: &[PlantEntry], library: &PlantLibrary) -> PackedGrid {
    let cols = dims.width.min(MAX_DISPLAY_SIDE) as usize;
    let rows = dims.height.min(MAX_DISPLAY_SIDE) as usize;
    let mut grid = PackedGrid::empty(rows, cols, dims.area());
    let capacity = grid.capacity();
    let mut next = 0usize;

    for entry in plants {
        let Some(spp) = library.squares_per_plant(&entry.id) else {
            debug!("Plant '{}' not in library, skipped", entry.id);
            grid.skipped.push(entry.id.clone());
            continue;
        };

        let quantity = entry.quantity();
        let needed = cells_needed(quantity, spp);
        let placed = needed.min(capacity - next);
        let start = (placed > 0).then(|| Coordinate::from_index(next, cols));

        for index in next..next + placed {
            let Coordinate { row, col } = Coordinate::from_index(index, cols);
            grid.cells[row][col] = Some(entry.id.clone());
        }
        next += placed;

        if placed < needed {
            debug!(
                "Plant '{}' needs {needed} cell(s), only {placed} fit in the preview",
                entry.id
            );
            grid.truncated = true;
        }
        grid.placements.push(Placement {
            id: entry.id.clone(),
            quantity,
            cells_needed: needed,
            cells_placed: placed,
            start,
        });
    }

    grid
}
