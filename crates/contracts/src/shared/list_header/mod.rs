//! Collapsible list header: search-panel visibility state machine.
//!
//! The header switches between a static row and an inline search box. The
//! host owns the `is_shown` flag and notifies the state machine on every
//! change; the state machine drives the layout marker and input focus through
//! the [`PresentationTarget`] and [`FocusTarget`] ports and clears the bound
//! search value when the panel is hidden.

mod config;
mod error;
mod ports;
mod state;

pub use config::{ListHeaderConfig, ROOT_CLASS, SEARCH_ACTIVE_CLASS};
pub use error::{ConfigError, TargetError};
pub use ports::{FocusTarget, PresentationTarget};
pub use state::{ListHeaderState, SideEffects, SkippedEffect};
