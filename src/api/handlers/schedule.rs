use actix_web::{http::Method, post, web, HttpResponse};

use crate::{
    error::GardenError,
    logic::{
        harvest::{parse_date, PlantingRecord},
        month_day::{month_name, MonthDaySelection},
        timeline::plan_timeline,
    },
    models::{
        plant::PlantLibrary,
        request::{
            links, ApiResponse, HarvestRequest, MonthDayRequest, MonthDayResponse, TimelineRequest,
        },
    },
};

/// POST /api/month-day
/// Applies a month and/or day change to a stored `MM-DD` value.
#[utoipa::path(
    context_path = "/api",
    tag = "schedule",
    request_body = MonthDayRequest,
    responses(
        (status = 200, description = "Normalised selection", body = crate::models::request::MonthDayApiResponse),
    )
)]
#[post("/month-day")]
pub async fn post_month_day(body: web::Json<MonthDayRequest>) -> HttpResponse {
    let request = body.into_inner();
    let mut selection = MonthDaySelection::from_value(request.value.as_deref());
    if let Some(month) = request.month {
        selection.select_month(month);
    }
    if let Some(day) = request.day {
        selection.select_day(day);
    }

    let response = MonthDayResponse {
        month: selection.month,
        month_name: selection.month.and_then(month_name).map(String::from),
        day: selection.day,
        value: selection.value().map(|v| v.to_string()),
        days_in_month: selection.days_in_selected_month(),
    };
    HttpResponse::Ok().json(ApiResponse::new(
        response,
        links([("self", "/api/month-day".into(), Method::POST)]),
    ))
}

/// POST /api/harvest
/// Computes the harvest date of a planting; a manual date wins over the computed one.
#[utoipa::path(
    context_path = "/api",
    tag = "schedule",
    request_body = HarvestRequest,
    responses(
        (status = 200, description = "Planting record with its harvest date", body = crate::models::request::HarvestApiResponse),
        (status = 400, description = "Invalid date or missing offset", body = crate::models::request::ErrorResponse),
        (status = 404, description = "Unknown plant", body = crate::models::request::ErrorResponse),
    )
)]
#[post("/harvest")]
pub async fn post_harvest(
    body: web::Json<HarvestRequest>,
    library: web::Data<PlantLibrary>,
) -> Result<HttpResponse, GardenError> {
    let request = body.into_inner();
    let planted_on = parse_date(&request.planted_on)?;
    let days = match (request.days_to_harvest, request.plant_id.as_deref()) {
        (Some(days), _) => days,
        (None, Some(id)) => {
            library
                .get(id)
                .ok_or_else(|| GardenError::PlantNotFound(id.to_string()))?
                .days_to_maturity
        }
        (None, None) => return Err(GardenError::MissingHarvestOffset),
    };

    let mut record = PlantingRecord::new(planted_on, days)?;
    if let Some(raw) = request.manual_override.as_deref() {
        record.override_harvest(parse_date(raw)?);
    }
    Ok(HttpResponse::Ok().json(ApiResponse::new(
        record,
        links([("self", "/api/harvest".into(), Method::POST)]),
    )))
}

/// POST /api/timeline
/// Planting timeline for a list of plants, relative to the frost dates.
#[utoipa::path(
    context_path = "/api",
    tag = "schedule",
    request_body = TimelineRequest,
    responses(
        (status = 200, description = "Timeline ordered by planting date", body = crate::models::request::TimelineApiResponse),
        (status = 400, description = "Invalid frost dates or year", body = crate::models::request::ErrorResponse),
    )
)]
#[post("/timeline")]
pub async fn post_timeline(
    body: web::Json<TimelineRequest>,
    library: web::Data<PlantLibrary>,
) -> Result<HttpResponse, GardenError> {
    let request = body.into_inner();
    let timeline = plan_timeline(request.year, request.frost, &request.plants, &library)?;

    let mut notices: Vec<String> = timeline
        .skipped
        .iter()
        .map(|id| format!("Plant '{id}' not found in the library, skipped."))
        .collect();
    notices.extend(
        timeline
            .entries
            .iter()
            .filter(|e| e.frost_risk)
            .map(|e| format!("{} may not be ready before the first fall frost.", e.name)),
    );
    Ok(HttpResponse::Ok().json(
        ApiResponse::new(
            timeline,
            links([
                ("self", "/api/timeline".into(), Method::POST),
                ("plants", "/api/plants".into(), Method::GET),
            ]),
        )
        .with_errors(notices),
    ))
}
