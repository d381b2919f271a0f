mod worker_dto;

pub use worker_dto::{
    CreateWorkerDto, UpdateWorkerDto, WorkerFormDto, WorkerListDto, WorkerListQuery,
    WorkerResponseDto, WorkerSummaryDto,
};
