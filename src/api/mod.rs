//! API layer: handlers, DTOs, and middleware.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
