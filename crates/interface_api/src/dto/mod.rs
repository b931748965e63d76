//! Request/Response data transfer objects

pub mod settlement;
pub mod split;
