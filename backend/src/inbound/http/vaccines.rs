//! Vaccine catalog endpoints.
//!
//! ```text
//! GET    /vaccines
//! GET    /vaccines/check/{code}
//! GET    /vaccines/{code}
//! POST   /vaccines
//! PUT    /vaccines
//! DELETE /vaccines/{code}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::Vaccine;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::vaccines_dto::{VaccineDto, map_to_dtos};

/// List every registered vaccine.
///
/// An empty registry answers 204 with an empty collection body so clients can
/// distinguish "nothing registered" from a faulted listing.
#[utoipa::path(
    get,
    path = "/vaccines",
    responses(
        (status = 200, description = "Registered vaccines", body = [VaccineDto]),
        (status = 204, description = "Registry is empty"),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["vaccines"],
    operation_id = "listVaccines"
)]
#[get("/vaccines")]
pub async fn list_vaccines(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let records = state.vaccines.list().await?;
    if records.is_empty() {
        return Ok(HttpResponse::NoContent().json(Vec::<VaccineDto>::new()));
    }
    Ok(HttpResponse::Ok().json(map_to_dtos(records)))
}

/// Report whether a vaccine code is registered.
///
/// The boolean body reflects the registry's answer verbatim; absence is never
/// a fault here.
#[utoipa::path(
    get,
    path = "/vaccines/check/{code}",
    params(("code" = String, Path, description = "Vaccine code to probe")),
    responses(
        (status = 200, description = "Presence flag", body = bool),
        (status = 400, description = "Blank code", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["vaccines"],
    operation_id = "isCodeRegistered"
)]
#[get("/vaccines/check/{code}")]
pub async fn is_code_registered(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let present = state.vaccines.exists(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(present))
}

/// Fetch a single vaccine by code.
#[utoipa::path(
    get,
    path = "/vaccines/{code}",
    params(("code" = String, Path, description = "Vaccine code to fetch")),
    responses(
        (status = 200, description = "Registered vaccine", body = VaccineDto),
        (status = 400, description = "Blank code", body = ErrorSchema),
        (status = 404, description = "No vaccine under this code", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["vaccines"],
    operation_id = "findVaccine"
)]
#[get("/vaccines/{code}")]
pub async fn find_vaccine(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let record = state.vaccines.find(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(VaccineDto::from(record)))
}

/// Register a new vaccine.
#[utoipa::path(
    post,
    path = "/vaccines",
    request_body = VaccineDto,
    responses(
        (status = 201, description = "Vaccine registered", body = VaccineDto),
        (status = 400, description = "Field rule violated", body = ErrorSchema),
        (status = 409, description = "Code already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["vaccines"],
    operation_id = "registerVaccine"
)]
#[post("/vaccines")]
pub async fn register_vaccine(
    state: web::Data<HttpState>,
    payload: web::Json<VaccineDto>,
) -> ApiResult<HttpResponse> {
    let created = state
        .vaccines
        .create(Vaccine::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(VaccineDto::from(created)))
}

/// Replace the vaccine registered under the payload's code.
#[utoipa::path(
    put,
    path = "/vaccines",
    request_body = VaccineDto,
    responses(
        (status = 200, description = "Vaccine replaced", body = VaccineDto),
        (status = 400, description = "Field rule violated", body = ErrorSchema),
        (status = 404, description = "No vaccine under this code", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["vaccines"],
    operation_id = "updateVaccine"
)]
#[put("/vaccines")]
pub async fn update_vaccine(
    state: web::Data<HttpState>,
    payload: web::Json<VaccineDto>,
) -> ApiResult<HttpResponse> {
    let updated = state
        .vaccines
        .update(Vaccine::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(VaccineDto::from(updated)))
}

/// Remove the vaccine registered under `code`.
///
/// The boolean body reports whether anything was removed; deleting an absent
/// code is a no-op success, not a fault.
#[utoipa::path(
    delete,
    path = "/vaccines/{code}",
    params(("code" = String, Path, description = "Vaccine code to remove")),
    responses(
        (status = 200, description = "Removal flag", body = bool),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["vaccines"],
    operation_id = "deleteVaccine"
)]
#[delete("/vaccines/{code}")]
pub async fn delete_vaccine(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let removed = state.vaccines.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(removed))
}
