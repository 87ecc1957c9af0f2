use crate::api::application::{ApplicantResponse, ApplicationResponse, CreateApplication};
use crate::api::employee::{EmployeeResponse, PatchEmployee};
use utoipa::{OpenApi, openapi};

/// Prefix the `#[utoipa::path]` annotations are written against.
const DOC_PREFIX: &str = "/api";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Leave API",
        version = "0.1.0",
        description = r#"
## Employee leave applications

- **Employee**: view an employee profile and correct their name
- **Application**: file a leave application for an existing employee
- **Status**: store liveness probe

Every error body has the shape `{"message": "..."}`.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::get_employee,
        crate::api::employee::patch_employee,

        crate::api::application::post_application,

        crate::api::status::status
    ),
    components(
        schemas(
            EmployeeResponse,
            PatchEmployee,
            CreateApplication,
            ApplicationResponse,
            ApplicantResponse
        )
    ),
    tags(
        (name = "Employee", description = "Employee profile APIs"),
        (name = "Application", description = "Leave application APIs"),
        (name = "Status", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// The API document with every prefixed path moved under `api_prefix`.
pub fn openapi_for_prefix(api_prefix: &str) -> openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let prefix = api_prefix.trim_end_matches('/');

    let paths = std::mem::take(&mut doc.paths.paths);
    doc.paths.paths = paths
        .into_iter()
        .map(|(path, item)| match path.strip_prefix(DOC_PREFIX) {
            Some(rest) if rest.starts_with('/') => (format!("{prefix}{rest}"), item),
            _ => (path, item),
        })
        .collect();

    doc
}
