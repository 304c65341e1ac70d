pub mod fixture;
pub mod logger;
pub mod mock;
