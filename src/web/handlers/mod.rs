//! HTML template rendering handlers.

mod landing;

pub use landing::landing_handler;
