pub mod list_header;
