mod region_dto;

pub use region_dto::{DepartmentResponseDto, DistrictResponseDto, ProvinceResponseDto};
