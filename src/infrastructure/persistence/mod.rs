//! Persistence implementations of the domain repository traits.

pub mod memory;
pub mod pg_click_repository;
pub mod pg_link_repository;
pub mod pg_session_repository;
pub mod pg_user_repository;

pub use memory::{
    MemoryClickRepository, MemoryLinkRepository, MemorySessionRepository, MemoryUserRepository,
};
pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;
pub use pg_session_repository::PgSessionRepository;
pub use pg_user_repository::PgUserRepository;
