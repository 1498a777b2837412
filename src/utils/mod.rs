//! Shared utilities: code and token generation, URL validation, password hashing.

pub mod code_generator;
pub mod password;
pub mod session_token;
pub mod url_validator;
