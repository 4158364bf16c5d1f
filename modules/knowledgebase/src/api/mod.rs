//! API layer

pub mod native;
pub mod rest;
