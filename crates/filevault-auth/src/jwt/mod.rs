//! JWT claim set and verification.

pub mod claims;
pub mod decoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
