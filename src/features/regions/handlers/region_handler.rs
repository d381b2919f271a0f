use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::regions::dtos::{
    DepartmentResponseDto, DistrictResponseDto, ProvinceResponseDto,
};
use crate::features::regions::services::RegionService;
use crate::shared::types::ApiResponse;

/// List all departments
#[utoipa::path(
    get,
    path = "/api/regions/departments",
    responses(
        (status = 200, description = "List of departments", body = ApiResponse<Vec<DepartmentResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_departments(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<DepartmentResponseDto>>>> {
    let departments = service.list_departments().await?;
    let dtos: Vec<DepartmentResponseDto> = departments.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// List provinces in a department
///
/// Used to populate the province select when a department is chosen.
/// Returns an empty list for an unknown department id.
#[utoipa::path(
    get,
    path = "/api/regions/departments/{id}/provinces",
    params(
        ("id" = i32, Path, description = "Department id")
    ),
    responses(
        (status = 200, description = "Provinces of the department", body = ApiResponse<Vec<ProvinceResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_provinces_by_department(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<ProvinceResponseDto>>>> {
    let provinces = service.list_provinces_by_department(id).await?;
    let dtos: Vec<ProvinceResponseDto> = provinces.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// List districts in a province
///
/// Used to populate the district select when a province is chosen.
/// Returns an empty list for an unknown province id.
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{id}/districts",
    params(
        ("id" = i32, Path, description = "Province id")
    ),
    responses(
        (status = 200, description = "Districts of the province", body = ApiResponse<Vec<DistrictResponseDto>>)
    ),
    tag = "regions"
)]
pub async fn list_districts_by_province(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let districts = service.list_districts_by_province(id).await?;
    let dtos: Vec<DistrictResponseDto> = districts.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}
