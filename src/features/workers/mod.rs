//! Worker records feature.
//!
//! CRUD over worker records (identity documents plus a department /
//! province / district assignment), with joined list and detail
//! projections and typed form view models for the client.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/workers` | List workers, optional exact sex filter |
//! | POST | `/api/workers` | Create a worker |
//! | GET | `/api/workers/new` | Choice lists for the create form |
//! | GET | `/api/workers/{id}` | Worker with geographic names |
//! | GET | `/api/workers/{id}/edit` | Worker plus pre-filtered choice lists |
//! | PUT | `/api/workers/{id}` | Replace a worker record |
//! | DELETE | `/api/workers/{id}` | Delete a worker (idempotent) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::WorkerService;
