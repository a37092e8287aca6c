use utoipa::OpenApi;

use crate::{
    logic::{harvest::PlantingRecord, month_day::MonthDaySelection},
    models::{
        bed::{Bed, BedDimensions, BedKind, Garden, PlantEntry},
        grid::{PackedGrid, Placement},
        plant::{Category, Plant},
        request::{
            BedPreviewRequest, BedSelectRequest, ErrorResponse, HarvestApiResponse,
            HarvestRequest, Link, MonthDayApiResponse, MonthDayRequest, MonthDayResponse,
            Pagination, PlantApiResponse, PlantListResponse, PlantResponse, PreviewApiResponse,
            SelectedBedApiResponse, SelectedBedResponse, TimelineApiResponse, TimelineRequest,
        },
        schedule::{FrostDates, Timeline, TimelineEntry},
        Coordinate,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Square Garden API",
        description = "Square-foot garden planner: browse the plant catalogue, preview bed layouts, pick frost-relative dates and compute planting timelines.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::plants::list_plants,
        crate::api::handlers::plants::get_plant,
        crate::api::handlers::beds::post_preview,
        crate::api::handlers::beds::post_select,
        crate::api::handlers::schedule::post_month_day,
        crate::api::handlers::schedule::post_harvest,
        crate::api::handlers::schedule::post_timeline,
    ),
    components(
        schemas(
            // Catalogue
            Category, Plant, PlantResponse,
            // Beds
            BedDimensions, BedKind, Bed, Garden, PlantEntry,
            BedPreviewRequest, BedSelectRequest, SelectedBedResponse,
            // Preview grid
            Coordinate, Placement, PackedGrid,
            // Schedule
            MonthDayRequest, MonthDayResponse, MonthDaySelection,
            HarvestRequest, PlantingRecord,
            FrostDates, TimelineRequest, TimelineEntry, Timeline,
            // Shared
            Link, Pagination, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            PlantApiResponse,
            PlantListResponse,
            PreviewApiResponse,
            SelectedBedApiResponse,
            MonthDayApiResponse,
            HarvestApiResponse,
            TimelineApiResponse,
        )
    ),
    tags(
        (name = "plants",   description = "Plant catalogue: list and detail"),
        (name = "beds",     description = "Bed selection and grid preview"),
        (name = "schedule", description = "Month/day picker, harvest dates and planting timeline"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/plants",
            "/api/plants/{id}",
            "/api/beds/preview",
            "/api/beds/select",
            "/api/month-day",
            "/api/harvest",
            "/api/timeline",
        ] {
            assert!(paths.contains(&expected), "Missing path {expected} in {paths:?}");
        }
    }
}
