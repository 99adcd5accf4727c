pub mod list_header;
pub mod list_header_toggle;

pub use list_header::ListHeader;
pub use list_header_toggle::ListHeaderToggle;
