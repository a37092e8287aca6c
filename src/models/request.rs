use std::collections::HashMap;

use actix_web::http::Method;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::{
    logic::harvest::PlantingRecord,
    models::{
        bed::{Bed, PlantEntry},
        grid::PackedGrid,
        plant::Plant,
        schedule::{FrostDates, Timeline},
    },
};

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    #[schema(value_type = String, example = "GET")]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Builds a `Links` map from `(relation, href, method)` triples.
pub fn links<const N: usize>(entries: [(&str, String, Method); N]) -> Links {
    entries
        .into_iter()
        .map(|(rel, href, method)| (rel.to_string(), link(href, method)))
        .collect()
}

/// Pagination metadata included in responses that return lists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    PlantApiResponse = ApiResponse<PlantResponse>,
    PreviewApiResponse = ApiResponse<PackedGrid>,
    SelectedBedApiResponse = ApiResponse<SelectedBedResponse>,
    MonthDayApiResponse = ApiResponse<MonthDayResponse>,
    HarvestApiResponse = ApiResponse<PlantingRecord>,
    TimelineApiResponse = ApiResponse<Timeline>,
)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: HashMap<String, Link>,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }

    /// Attaches non-fatal notices (skipped plants, truncated preview, ...).
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }
}

/// Generic paginated list response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(PlantListResponse = PaginatedResponse<PlantApiResponse>)]
pub struct PaginatedResponse<T> {
    pub payload: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: HashMap<String, Link>,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(payload: Vec<T>, links: Links, pagination: Pagination) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
            pagination,
        }
    }
}

/// Body of every 4xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Plant catalogue entry as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlantResponse {
    #[serde(flatten)]
    pub plant: Plant,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BedPreviewRequest {
    /// Bed width in squares.
    pub width: u32,
    /// Bed height in squares.
    pub height: u32,
    /// Plants in packing order.
    #[serde(default)]
    pub plants: Vec<PlantEntry>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BedSelectRequest {
    pub beds: Vec<Bed>,
    /// Id of the selected bed; the first bed is used when absent or unknown.
    pub selected: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectedBedResponse {
    pub label: String,
    pub bed: Bed,
    pub preview: PackedGrid,
}

/// Month/day picker interaction: the stored value, then an optional month
/// change, then an optional day change.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthDayRequest {
    #[schema(example = "03-31")]
    pub value: Option<String>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthDayResponse {
    pub month: Option<u32>,
    pub month_name: Option<String>,
    pub day: Option<u32>,
    /// `MM-DD`, present once both month and day are selected.
    pub value: Option<String>,
    pub days_in_month: u32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HarvestRequest {
    /// Planting date, `YYYY-MM-DD`.
    #[schema(example = "2024-05-01")]
    pub planted_on: String,
    /// Catalogue plant whose days to maturity is used when `daysToHarvest` is absent.
    pub plant_id: Option<String>,
    pub days_to_harvest: Option<u32>,
    /// Manually chosen harvest date, `YYYY-MM-DD`; wins over the computed one.
    pub manual_override: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRequest {
    pub year: i32,
    pub frost: FrostDates,
    #[serde(default)]
    pub plants: Vec<PlantEntry>,
}
