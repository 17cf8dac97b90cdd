//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. It
//! registers the vaccine and health endpoint paths plus the schema wrappers
//! that describe domain types without coupling them to utoipa. The generated
//! specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::vaccines_dto::{VaccineDto, VaccineTypeDto};

/// OpenAPI document for the vaccine registry REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vaccine registry API",
        description = "Catalog of vaccine records exposed over a create/read/update/delete/exists interface."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::vaccines::list_vaccines,
        crate::inbound::http::vaccines::is_code_registered,
        crate::inbound::http::vaccines::find_vaccine,
        crate::inbound::http::vaccines::register_vaccine,
        crate::inbound::http::vaccines::update_vaccine,
        crate::inbound::http::vaccines::delete_vaccine,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(VaccineDto, VaccineTypeDto, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "vaccines", description = "Operations on the vaccine catalog"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
