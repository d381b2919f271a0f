pub mod regions;
pub mod workers;
