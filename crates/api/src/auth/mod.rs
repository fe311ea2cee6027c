//! Token codec and password hashing.

pub mod password;
pub mod token;
