use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::regions::dtos::{
    DepartmentResponseDto, DistrictResponseDto, ProvinceResponseDto,
};
use crate::features::workers::models::{Worker, WorkerSummary};
use crate::shared::validation::{validate_document_number, validate_sex};

/// Query parameters for the worker list
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct WorkerListQuery {
    /// Restrict the list to workers with this exact sex value ("M" or "F").
    /// Empty or absent means no restriction.
    #[param(example = "M")]
    pub sex: Option<String>,
}

impl WorkerListQuery {
    /// Normalized filter: an empty string counts as no filter
    pub fn sex_filter(&self) -> Option<&str> {
        self.sex.as_deref().filter(|s| !s.is_empty())
    }
}

/// Request DTO for creating a worker
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerDto {
    /// Identity document type, e.g. "DNI" or "CE"
    #[validate(length(min = 1, max = 20, message = "Document type is required"))]
    pub document_type: String,

    #[validate(custom(function = validate_document_number))]
    pub document_number: String,

    /// Full name of the worker
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = validate_sex))]
    pub sex: String,

    #[validate(range(min = 1, message = "Department is required"))]
    pub department_id: i32,

    #[validate(range(min = 1, message = "Province is required"))]
    pub province_id: i32,

    #[validate(range(min = 1, message = "District is required"))]
    pub district_id: i32,
}

/// Request DTO for replacing a worker record in full.
/// The id must match the path id of the request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkerDto {
    pub id: i32,

    #[validate(length(min = 1, max = 20, message = "Document type is required"))]
    pub document_type: String,

    #[validate(custom(function = validate_document_number))]
    pub document_number: String,

    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = validate_sex))]
    pub sex: String,

    #[validate(range(min = 1, message = "Department is required"))]
    pub department_id: i32,

    #[validate(range(min = 1, message = "Province is required"))]
    pub province_id: i32,

    #[validate(range(min = 1, message = "District is required"))]
    pub district_id: i32,
}

/// Response DTO for a worker as stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkerResponseDto {
    pub id: i32,
    pub document_type: String,
    pub document_number: String,
    pub name: String,
    pub sex: String,
    pub department_id: i32,
    pub province_id: i32,
    pub district_id: i32,
}

impl From<Worker> for WorkerResponseDto {
    fn from(worker: Worker) -> Self {
        Self {
            id: worker.id,
            document_type: worker.document_type,
            document_number: worker.document_number,
            name: worker.name,
            sex: worker.sex,
            department_id: worker.department_id,
            province_id: worker.province_id,
            district_id: worker.district_id,
        }
    }
}

/// Response DTO for a worker joined to its geographic names
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkerSummaryDto {
    pub id: i32,
    pub document_type: String,
    pub document_number: String,
    pub name: String,
    pub sex: String,
    pub department: String,
    pub province: String,
    pub district: String,
}

impl From<WorkerSummary> for WorkerSummaryDto {
    fn from(summary: WorkerSummary) -> Self {
        Self {
            id: summary.id,
            document_type: summary.document_type,
            document_number: summary.document_number,
            name: summary.name,
            sex: summary.sex,
            department: summary.department,
            province: summary.province,
            district: summary.district,
        }
    }
}

/// Response DTO for the worker list, echoing the applied filter
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkerListDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex_filter: Option<String>,
    pub items: Vec<WorkerSummaryDto>,
}

/// View model for the create and edit forms: the record under edit (if any)
/// plus the choice lists for the cascading selects
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkerFormDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<WorkerResponseDto>,
    pub departments: Vec<DepartmentResponseDto>,
    pub provinces: Vec<ProvinceResponseDto>,
    pub districts: Vec<DistrictResponseDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn valid_create_dto() -> CreateWorkerDto {
        CreateWorkerDto {
            document_type: "DNI".to_string(),
            document_number: "12345678".to_string(),
            name: Name().fake(),
            sex: "M".to_string(),
            department_id: 1,
            province_id: 1,
            district_id: 1,
        }
    }

    #[test]
    fn test_valid_create_dto_passes() {
        assert!(valid_create_dto().validate().is_ok());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let dto = CreateWorkerDto {
            name: "".to_string(),
            ..valid_create_dto()
        };
        let err = dto.validate().unwrap_err();
        assert!(err.field_errors().contains_key("name"));
    }

    #[test]
    fn test_invalid_sex_fails_validation() {
        let dto = CreateWorkerDto {
            sex: "x".to_string(),
            ..valid_create_dto()
        };
        let err = dto.validate().unwrap_err();
        assert!(err.field_errors().contains_key("sex"));
    }

    #[test]
    fn test_malformed_document_number_fails_validation() {
        let dto = CreateWorkerDto {
            document_number: "12-34".to_string(),
            ..valid_create_dto()
        };
        let err = dto.validate().unwrap_err();
        assert!(err.field_errors().contains_key("document_number"));
    }

    #[test]
    fn test_zero_department_id_fails_validation() {
        let dto = CreateWorkerDto {
            department_id: 0,
            ..valid_create_dto()
        };
        let err = dto.validate().unwrap_err();
        assert!(err.field_errors().contains_key("department_id"));
    }

    #[test]
    fn test_sex_filter_normalization() {
        let absent = WorkerListQuery { sex: None };
        assert_eq!(absent.sex_filter(), None);

        let empty = WorkerListQuery {
            sex: Some("".to_string()),
        };
        assert_eq!(empty.sex_filter(), None);

        let set = WorkerListQuery {
            sex: Some("M".to_string()),
        };
        assert_eq!(set.sex_filter(), Some("M"));
    }
}
