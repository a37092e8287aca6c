use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum Category {
    Fruit,
    Vegetable,
    Herb,
    Root,
    Leafy,
    Flower,
}

/// One catalogue entry.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Grid squares taken by a single plant: 0.0625 for sixteen per square,
    /// 2.0 for a plant spreading over two squares.
    pub squares_per_plant: f64,
    /// Days from planting out to the first harvest.
    pub days_to_maturity: u32,
    /// Indoor sowing, in weeks relative to the last spring frost (negative = before).
    pub sow_indoors_weeks: Option<i32>,
    /// Direct sowing or transplanting, in weeks relative to the last spring frost.
    pub plant_out_weeks: Option<i32>,
}

/// Plant catalogue with lookup by identifier. Insertion order is kept for listing.
#[derive(Debug, Clone, Default)]
pub struct PlantLibrary {
    plants: Vec<Plant>,
    index: HashMap<String, usize>,
}

impl PlantLibrary {
    /// Builds the library. A later entry with an already-seen id replaces the earlier one.
    pub fn new(plants: Vec<Plant>) -> Self {
        let mut library = Self::default();
        for plant in plants {
            library.insert(plant);
        }
        library
    }

    pub fn insert(&mut self, plant: Plant) {
        match self.index.get(&plant.id) {
            Some(&pos) => self.plants[pos] = plant,
            None => {
                self.index.insert(plant.id.clone(), self.plants.len());
                self.plants.push(plant);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Plant> {
        self.index.get(id).map(|&pos| &self.plants[pos])
    }

    pub fn all(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Area of one unit of `id`. Entries with a non-positive or non-finite
    /// area are treated as missing.
    pub fn squares_per_plant(&self, id: &str) -> Option<f64> {
        self.get(id)
            .map(|p| p.squares_per_plant)
            .filter(|spp| spp.is_finite() && *spp > 0.0)
    }
}
