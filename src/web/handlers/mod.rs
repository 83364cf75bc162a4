pub mod errors;
pub mod pages;

pub use errors::error_page;
pub use pages::render_page;
