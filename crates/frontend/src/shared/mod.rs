pub mod components;
pub mod dom_targets;
pub mod icons;
pub mod list_utils;
