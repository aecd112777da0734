pub mod config;
pub mod dataset;
pub mod engine;
pub mod ensemble;
pub mod error;
pub mod model;
pub mod numeric;
pub mod regressor;
