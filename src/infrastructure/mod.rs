//! Infrastructure layer: persistence backends and external collaborators.

pub mod persistence;
pub mod title;
