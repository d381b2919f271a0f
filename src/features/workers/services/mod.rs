mod worker_service;

pub use worker_service::{UpdateOutcome, WorkerService};
