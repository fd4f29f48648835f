#![forbid(unsafe_code)]

pub mod generator;
pub mod model;
pub mod validator;

pub use generator::{generate_for_topic, generate_round};
pub use validator::validate;
