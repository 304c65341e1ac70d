pub mod config;
pub mod error;
pub mod loader;
pub mod page;
pub mod source;

#[cfg(feature = "browser")]
pub mod browser;

pub use loader::{
    init_with,
    render_page,
};
