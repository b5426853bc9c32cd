//! API handlers for Equiplease REST endpoints

pub mod equipment;
pub mod health;
pub mod openapi;
pub mod storefront;
