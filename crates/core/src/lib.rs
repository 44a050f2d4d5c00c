#![forbid(unsafe_code)]

pub mod derivation;
pub mod error;
pub mod layout;
pub mod model;
pub mod pattern;
pub mod quiz;
pub mod share;

pub use error::Error;
