//! Request handlers

pub mod health;
pub mod settlement;
pub mod split;
