use actix_web::{http::Method, post, web, HttpResponse};

use crate::{
    error::GardenError,
    logic::packing::pack_bed,
    models::{
        bed::{BedDimensions, Garden},
        grid::PackedGrid,
        plant::PlantLibrary,
        request::{links, ApiResponse, BedPreviewRequest, BedSelectRequest, SelectedBedResponse},
    },
};

/// Human-readable notices for plants that were skipped or cut off.
fn preview_notices(grid: &PackedGrid) -> Vec<String> {
    let mut notices: Vec<String> = grid
        .skipped
        .iter()
        .map(|id| format!("Plant '{id}' not found in the library, skipped."))
        .collect();
    let cut: Vec<&str> = grid
        .placements
        .iter()
        .filter(|p| p.is_truncated())
        .map(|p| p.id.as_str())
        .collect();
    if !cut.is_empty() {
        notices.push(format!(
            "Preview is full ({} cells): {} did not fit entirely.",
            grid.capacity(),
            cut.join(", ")
        ));
    }
    notices
}

/// POST /api/beds/preview
/// Lays the plants out on the bed preview grid (capped at 10×10).
#[utoipa::path(
    context_path = "/api",
    tag = "beds",
    request_body = BedPreviewRequest,
    responses(
        (status = 200, description = "Packed preview grid", body = crate::models::request::PreviewApiResponse),
        (status = 400, description = "Invalid bed dimensions", body = crate::models::request::ErrorResponse),
    )
)]
#[post("/beds/preview")]
pub async fn post_preview(
    body: web::Json<BedPreviewRequest>,
    library: web::Data<PlantLibrary>,
) -> Result<HttpResponse, GardenError> {
    let request = body.into_inner();
    let dims = BedDimensions::new(request.width, request.height)?;
    let grid = pack_bed(dims, &request.plants, &library);
    let notices = preview_notices(&grid);
    Ok(HttpResponse::Ok().json(
        ApiResponse::new(
            grid,
            links([
                ("self", "/api/beds/preview".into(), Method::POST),
                ("plants", "/api/plants".into(), Method::GET),
            ]),
        )
        .with_errors(notices),
    ))
}

/// POST /api/beds/select
/// Picks a bed (falling back to the first one) and returns its preview.
#[utoipa::path(
    context_path = "/api",
    tag = "beds",
    request_body = BedSelectRequest,
    responses(
        (status = 200, description = "Selected bed with its preview", body = crate::models::request::SelectedBedApiResponse),
        (status = 400, description = "Invalid bed dimensions", body = crate::models::request::ErrorResponse),
        (status = 404, description = "The garden has no beds", body = crate::models::request::ErrorResponse),
    )
)]
#[post("/beds/select")]
pub async fn post_select(
    body: web::Json<BedSelectRequest>,
    library: web::Data<PlantLibrary>,
) -> Result<HttpResponse, GardenError> {
    let request = body.into_inner();
    let garden = Garden { beds: request.beds };
    let bed = garden
        .select_bed(request.selected.as_deref())
        .cloned()
        .ok_or(GardenError::NoBeds)?;
    bed.dimensions.validate()?;

    let preview = pack_bed(bed.dimensions, &bed.plants, &library);
    let notices = preview_notices(&preview);
    let response = SelectedBedResponse {
        label: bed.label(),
        bed,
        preview,
    };
    Ok(HttpResponse::Ok().json(
        ApiResponse::new(
            response,
            links([
                ("self", "/api/beds/select".into(), Method::POST),
                ("preview", "/api/beds/preview".into(), Method::POST),
            ]),
        )
        .with_errors(notices),
    ))
}
