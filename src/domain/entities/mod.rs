//! Core business entities.

pub mod click;
pub mod link;
pub mod session;
pub mod user;

pub use click::Click;
pub use link::{Link, NewLink};
pub use session::Session;
pub use user::{NewUser, User};
