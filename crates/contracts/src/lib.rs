pub mod enums;
pub mod shared;

pub use enums::search_visibility::SearchVisibility;
pub use shared::list_header::{
    ConfigError, FocusTarget, ListHeaderConfig, ListHeaderState, PresentationTarget, SideEffects,
    SkippedEffect, TargetError,
};
