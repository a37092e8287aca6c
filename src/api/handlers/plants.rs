use actix_web::{get, http::Method, web, HttpResponse};

use crate::{
    error::GardenError,
    models::{
        plant::PlantLibrary,
        request::{links, ApiResponse, Links, Pagination, PaginatedResponse, PlantResponse},
    },
};

fn plant_links(id: &str) -> Links {
    links([
        ("self", format!("/api/plants/{id}"), Method::GET),
        ("collection", "/api/plants".into(), Method::GET),
    ])
}

/// GET /api/plants
/// Returns the whole plant catalogue.
#[utoipa::path(
    context_path = "/api",
    tag = "plants",
    responses(
        (status = 200, description = "Plant catalogue", body = crate::models::request::PlantListResponse),
    )
)]
#[get("/plants")]
pub async fn list_plants(library: web::Data<PlantLibrary>) -> HttpResponse {
    let total = library.len();
    let items: Vec<ApiResponse<PlantResponse>> = library
        .all()
        .iter()
        .map(|p| {
            ApiResponse::new(
                PlantResponse { plant: p.clone() },
                plant_links(&p.id),
            )
        })
        .collect();
    HttpResponse::Ok().json(PaginatedResponse::new(
        items,
        links([("self", "/api/plants".into(), Method::GET)]),
        Pagination {
            page: 1,
            per_page: total,
            total,
            total_pages: 1,
        },
    ))
}

/// GET /api/plants/{id}
/// Returns a single plant by id.
#[utoipa::path(
    context_path = "/api",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id, e.g. `tomato`")),
    responses(
        (status = 200, description = "Plant found", body = crate::models::request::PlantApiResponse),
        (status = 404, description = "Unknown plant", body = crate::models::request::ErrorResponse),
    )
)]
#[get("/plants/{id}")]
pub async fn get_plant(
    path: web::Path<String>,
    library: web::Data<PlantLibrary>,
) -> Result<HttpResponse, GardenError> {
    let id = path.into_inner();
    let plant = library
        .get(&id)
        .cloned()
        .ok_or_else(|| GardenError::PlantNotFound(id.clone()))?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(
        PlantResponse { plant },
        plant_links(&id),
    )))
}
