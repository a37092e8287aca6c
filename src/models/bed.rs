use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{GardenError, Result};

/// Size of a bed in square-foot units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BedDimensions {
    pub width: u32,
    pub height: u32,
}

impl BedDimensions {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let dims = Self { width, height };
        dims.validate()?;
        Ok(dims)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GardenError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// A plant assigned to a bed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantEntry {
    pub id: String,
    /// Number of plants (defaults to 1 when omitted).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl PlantEntry {
    pub fn new(id: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity: Some(quantity),
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum BedKind {
    RaisedBed,
    Pot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bed {
    pub id: String,
    pub name: String,
    pub kind: BedKind,
    pub dimensions: BedDimensions,
    #[serde(default)]
    pub plants: Vec<PlantEntry>,
}

impl Bed {
    /// Label shown by the bed selector, e.g. `Back bed (4×8)`.
    pub fn label(&self) -> String {
        format!(
            "{} ({}×{})",
            self.name, self.dimensions.width, self.dimensions.height
        )
    }
}

/// The user's beds and pots, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Garden {
    pub beds: Vec<Bed>,
}

impl Garden {
    /// Returns the bed matching `selected`, falling back to the first bed
    /// when nothing (or an unknown id) is selected.
    pub fn select_bed(&self, selected: Option<&str>) -> Option<&Bed> {
        selected
            .and_then(|id| self.beds.iter().find(|b| b.id == id))
            .or_else(|| self.beds.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bed(id: &str, name: &str, width: u32, height: u32) -> Bed {
        Bed {
            id: id.into(),
            name: name.into(),
            kind: BedKind::RaisedBed,
            dimensions: BedDimensions { width, height },
            plants: vec![],
        }
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert!(BedDimensions::new(0, 4).is_err());
        assert!(BedDimensions::new(4, 0).is_err());
        assert_eq!(BedDimensions::new(4, 8).map(|d| d.area()), Ok(32));
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let entry: PlantEntry = serde_json::from_str(r#"{"id":"tomato"}"#).unwrap();
        assert_eq!(entry.quantity(), 1);
        assert_eq!(PlantEntry::new("tomato", 0).quantity(), 0);
    }

    #[test]
    fn test_select_bed_by_id() {
        let garden = Garden {
            beds: vec![bed("a", "Front", 4, 4), bed("b", "Back", 4, 8)],
        };
        assert_eq!(garden.select_bed(Some("b")).map(|b| b.label()), Some("Back (4×8)".into()));
    }

    #[test]
    fn test_select_bed_falls_back_to_first() {
        let garden = Garden {
            beds: vec![bed("a", "Front", 4, 4), bed("b", "Back", 4, 8)],
        };
        assert_eq!(garden.select_bed(None).map(|b| b.id.as_str()), Some("a"));
        assert_eq!(garden.select_bed(Some("zzz")).map(|b| b.id.as_str()), Some("a"));
        assert!(Garden::default().select_bed(Some("a")).is_none());
    }
}
