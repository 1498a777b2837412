//! Application layer: business logic over the domain.

pub mod services;
