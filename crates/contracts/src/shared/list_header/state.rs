use super::error::TargetError;
use super::ports::{FocusTarget, PresentationTarget};
use crate::enums::search_visibility::SearchVisibility;

/// A side effect that was dropped because its DOM target failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkippedEffect {
    Marker(TargetError),
    Focus(TargetError),
}

/// What a single `set_shown` notification actually did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideEffects {
    /// `Some(active)` when the layout marker was added or removed
    pub marker: Option<bool>,
    /// Focus was moved to the search input
    pub focused: bool,
    /// The bound search value was reset and the host must receive `""`
    pub value_cleared: bool,
    pub skipped: Vec<SkippedEffect>,
}

impl SideEffects {
    /// Duplicate notification, nothing happened
    pub fn is_noop(&self) -> bool {
        self.marker.is_none() && !self.focused && !self.value_cleared && self.skipped.is_empty()
    }
}

/// Visibility state of one mounted list header plus its bound search value.
///
/// Starts `Hidden` regardless of configuration: the initial `is_shown` is
/// applied by the host's first `set_shown` call, so a header mounted hidden
/// keeps its initial search value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListHeaderState {
    visibility: SearchVisibility,
    search_value: String,
}

impl ListHeaderState {
    pub fn new(search_value: impl Into<String>) -> Self {
        Self {
            visibility: SearchVisibility::Hidden,
            search_value: search_value.into(),
        }
    }

    pub fn visibility(&self) -> SearchVisibility {
        self.visibility
    }

    pub fn is_shown(&self) -> bool {
        self.visibility.is_shown()
    }

    pub fn search_value(&self) -> &str {
        &self.search_value
    }

    /// Host-side write of the bound value. Accepted in any state.
    pub fn set_search_value(&mut self, value: impl Into<String>) {
        self.search_value = value.into();
    }

    pub fn clear_search_value(&mut self) {
        self.search_value.clear();
    }

    /// Observe a new `is_shown` value from the host.
    ///
    /// Repeated values are ignored. A failing port never aborts the
    /// transition: the failure is reported in [`SideEffects::skipped`].
    pub fn set_shown<P, F>(&mut self, shown: bool, presentation: &P, focus: &F) -> SideEffects
    where
        P: PresentationTarget + ?Sized,
        F: FocusTarget + ?Sized,
    {
        let next = SearchVisibility::from_shown(shown);
        let mut effects = SideEffects::default();

        if next == self.visibility {
            log::trace!("list header already {}, ignoring notification", next);
            return effects;
        }

        log::debug!("list header: {} -> {}", self.visibility, next);
        self.visibility = next;

        match next {
            SearchVisibility::Shown => {
                apply_marker(presentation, true, &mut effects);
                match focus.focus() {
                    Ok(()) => effects.focused = true,
                    Err(err) => {
                        log::warn!("list header: focus skipped: {}", err);
                        effects.skipped.push(SkippedEffect::Focus(err));
                    }
                }
            }
            SearchVisibility::Hidden => {
                self.clear_search_value();
                effects.value_cleared = true;
                apply_marker(presentation, false, &mut effects);
            }
        }

        effects
    }
}

fn apply_marker<P>(presentation: &P, active: bool, effects: &mut SideEffects)
where
    P: PresentationTarget + ?Sized,
{
    match presentation.set_active(active) {
        Ok(()) => effects.marker = Some(active),
        Err(err) => {
            log::warn!("list header: layout marker skipped: {}", err);
            effects.skipped.push(SkippedEffect::Marker(err));
        }
    }
}
