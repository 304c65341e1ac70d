pub mod error;
pub mod model;
pub mod render;
pub mod validate;
