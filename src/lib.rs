pub mod api;
pub mod engine;
pub mod entities;
pub mod error;
pub mod fare;
pub mod geo;
pub mod tracking;
