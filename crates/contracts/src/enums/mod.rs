pub mod search_visibility;
