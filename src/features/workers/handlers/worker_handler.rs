use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::workers::dtos::{
    CreateWorkerDto, UpdateWorkerDto, WorkerFormDto, WorkerListDto, WorkerListQuery,
    WorkerResponseDto, WorkerSummaryDto,
};
use crate::features::workers::routes::WorkersState;
use crate::features::workers::services::UpdateOutcome;
use crate::shared::types::{ApiResponse, Meta};

/// List workers with their geographic names
///
/// Optionally restricted to an exact sex match; an empty or absent `sex`
/// parameter lists everyone. The applied filter is echoed in the response.
#[utoipa::path(
    get,
    path = "/api/workers",
    params(WorkerListQuery),
    responses(
        (status = 200, description = "List of workers", body = ApiResponse<WorkerListDto>)
    ),
    tag = "workers"
)]
pub async fn list_workers(
    State(state): State<WorkersState>,
    Query(query): Query<WorkerListQuery>,
) -> Result<Json<ApiResponse<WorkerListDto>>> {
    let filter = query.sex_filter();
    let workers = state.workers.list(filter).await?;

    let items: Vec<WorkerSummaryDto> = workers.into_iter().map(Into::into).collect();
    let total = items.len() as i64;
    let list = WorkerListDto {
        sex_filter: filter.map(str::to_string),
        items,
    };

    Ok(Json(ApiResponse::success(
        Some(list),
        None,
        Some(Meta { total }),
    )))
}

/// Choice lists for the create form
///
/// Full department list plus empty province/district lists; the client
/// fills those in through the cascading region endpoints.
#[utoipa::path(
    get,
    path = "/api/workers/new",
    responses(
        (status = 200, description = "Create form data", body = ApiResponse<WorkerFormDto>)
    ),
    tag = "workers"
)]
pub async fn new_worker_form(
    State(state): State<WorkersState>,
) -> Result<Json<ApiResponse<WorkerFormDto>>> {
    let departments = state.regions.list_departments().await?;

    let form = WorkerFormDto {
        worker: None,
        departments: departments.into_iter().map(Into::into).collect(),
        provinces: Vec::new(),
        districts: Vec::new(),
    };

    Ok(Json(ApiResponse::success(Some(form), None, None)))
}

/// Create a worker
#[utoipa::path(
    post,
    path = "/api/workers",
    request_body = CreateWorkerDto,
    responses(
        (status = 201, description = "Worker created", body = ApiResponse<WorkerResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "workers"
)]
pub async fn create_worker(
    State(state): State<WorkersState>,
    AppJson(dto): AppJson<CreateWorkerDto>,
) -> Result<(StatusCode, Json<ApiResponse<WorkerResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let worker = state.workers.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(worker.into()),
            Some("Worker created".to_string()),
            None,
        )),
    ))
}

/// Get a worker with its geographic names
///
/// Also serves as the delete confirmation view.
#[utoipa::path(
    get,
    path = "/api/workers/{id}",
    params(
        ("id" = i32, Path, description = "Worker id")
    ),
    responses(
        (status = 200, description = "Worker details", body = ApiResponse<WorkerSummaryDto>),
        (status = 404, description = "Worker not found")
    ),
    tag = "workers"
)]
pub async fn get_worker(
    State(state): State<WorkersState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<WorkerSummaryDto>>> {
    let worker = state.workers.get_summary(id).await?;
    Ok(Json(ApiResponse::success(Some(worker.into()), None, None)))
}

/// The worker plus choice lists for the edit form
///
/// Provinces are pre-filtered to the worker's current department and
/// districts to its current province.
#[utoipa::path(
    get,
    path = "/api/workers/{id}/edit",
    params(
        ("id" = i32, Path, description = "Worker id")
    ),
    responses(
        (status = 200, description = "Edit form data", body = ApiResponse<WorkerFormDto>),
        (status = 404, description = "Worker not found")
    ),
    tag = "workers"
)]
pub async fn edit_worker_form(
    State(state): State<WorkersState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<WorkerFormDto>>> {
    let worker = state.workers.get(id).await?;

    let departments = state.regions.list_departments().await?;
    let provinces = state
        .regions
        .list_provinces_by_department(worker.department_id)
        .await?;
    let districts = state
        .regions
        .list_districts_by_province(worker.province_id)
        .await?;

    let form = WorkerFormDto {
        worker: Some(worker.into()),
        departments: departments.into_iter().map(Into::into).collect(),
        provinces: provinces.into_iter().map(Into::into).collect(),
        districts: districts.into_iter().map(Into::into).collect(),
    };

    Ok(Json(ApiResponse::success(Some(form), None, None)))
}

/// Replace a worker record
///
/// The path id must match the body id. A concurrent modification that
/// leaves the record in place is surfaced as a conflict; one that removed
/// the record is a plain not-found.
#[utoipa::path(
    put,
    path = "/api/workers/{id}",
    params(
        ("id" = i32, Path, description = "Worker id")
    ),
    request_body = UpdateWorkerDto,
    responses(
        (status = 200, description = "Worker updated", body = ApiResponse<WorkerResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Worker not found or id mismatch"),
        (status = 409, description = "Concurrent modification detected")
    ),
    tag = "workers"
)]
pub async fn update_worker(
    State(state): State<WorkersState>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<UpdateWorkerDto>,
) -> Result<Json<ApiResponse<WorkerResponseDto>>> {
    if id != dto.id {
        return Err(AppError::NotFound(format!("Worker with id {} not found", id)));
    }

    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    match state.workers.update(dto).await? {
        UpdateOutcome::Updated(worker) => Ok(Json(ApiResponse::success(
            Some(worker.into()),
            Some("Worker updated".to_string()),
            None,
        ))),
        UpdateOutcome::NotFound => Err(AppError::NotFound(format!(
            "Worker with id {} not found",
            id
        ))),
        UpdateOutcome::Conflict => Err(AppError::Conflict(format!(
            "Worker with id {} was modified concurrently",
            id
        ))),
    }
}

/// Delete a worker
///
/// Idempotent: deleting an id that no longer exists still succeeds.
#[utoipa::path(
    delete,
    path = "/api/workers/{id}",
    params(
        ("id" = i32, Path, description = "Worker id")
    ),
    responses(
        (status = 200, description = "Worker deleted (or already absent)")
    ),
    tag = "workers"
)]
pub async fn delete_worker(
    State(state): State<WorkersState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    state.workers.delete(id).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Worker deleted".to_string()),
        None,
    )))
}
