use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::features::workers::{dtos as workers_dtos, handlers as workers_handlers};
use crate::shared::types::Meta;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Workers
        workers_handlers::list_workers,
        workers_handlers::new_worker_form,
        workers_handlers::create_worker,
        workers_handlers::get_worker,
        workers_handlers::edit_worker_form,
        workers_handlers::update_worker,
        workers_handlers::delete_worker,
        // Regions
        regions_handlers::list_departments,
        regions_handlers::list_provinces_by_department,
        regions_handlers::list_districts_by_province,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Workers
            workers_dtos::CreateWorkerDto,
            workers_dtos::UpdateWorkerDto,
            workers_dtos::WorkerResponseDto,
            workers_dtos::WorkerSummaryDto,
            workers_dtos::WorkerListDto,
            workers_dtos::WorkerFormDto,
            // Regions
            regions_dtos::DepartmentResponseDto,
            regions_dtos::ProvinceResponseDto,
            regions_dtos::DistrictResponseDto,
        )
    ),
    tags(
        (name = "workers", description = "Worker records (CRUD, list projection, form data)"),
        (name = "regions", description = "Geographic lookups (departments, provinces, districts)"),
    ),
    info(
        title = "Worker Registry API",
        version = "0.1.0",
        description = "API documentation for the worker registry",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
