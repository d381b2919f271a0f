mod worker;

pub use worker::{Worker, WorkerSummary};
