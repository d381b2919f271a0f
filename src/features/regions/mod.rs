//! Geographic lookup feature.
//!
//! Three-level hierarchy used by the worker forms, each level scoped to
//! its parent: Department -> Province -> District.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/departments` | List all departments |
//! | GET | `/api/regions/departments/{id}/provinces` | Provinces of a department |
//! | GET | `/api/regions/provinces/{id}/districts` | Districts of a province |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RegionService;
