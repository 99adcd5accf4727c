//! Заголовок списка со встроенной панелью поиска
//!
//! # Примеры
//!
//! ```ignore
//! let search_shown = RwSignal::new(false);
//! let search = RwSignal::new(String::new());
//!
//! <ListHeader placeholder="Search workspaces" search_value=search is_shown=search_shown>
//!     <span>"Name"</span>
//!     <span>"Updated"</span>
//! </ListHeader>
//! ```

use crate::shared::dom_targets::{InputTarget, RootTarget};
use crate::shared::icons::icon;
use contracts::shared::list_header::ROOT_CLASS;
use contracts::ListHeaderState;
use leptos::html::{Div, Input};
use leptos::prelude::*;

/// Collapsible list header.
///
/// Follows `is_shown` from the host: when it turns on, the root gets the
/// flex search marker and the input is focused; when it turns off, the
/// marker is removed and `search_value` is reset to an empty string.
#[component]
pub fn ListHeader(
    /// Hint text of the search input
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Search text, shared with the host
    search_value: RwSignal<String>,
    /// Visibility of the search box, owned by the host
    #[prop(into)]
    is_shown: Signal<bool>,
    /// Static header content, visible while search is collapsed
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let root_ref = NodeRef::<Div>::new();
    let input_ref = NodeRef::<Input>::new();
    let state = StoredValue::new(ListHeaderState::new(search_value.get_untracked()));

    // Host writes to the binding
    Effect::new(move |_| {
        let value = search_value.get();
        state.update_value(|s| s.set_search_value(value));
    });

    Effect::new(move |_| {
        let shown = is_shown.get();
        let effects = state.try_update_value(|s| {
            s.set_shown(shown, &RootTarget(root_ref), &InputTarget(input_ref))
        });

        if let Some(effects) = effects {
            if effects.value_cleared && search_value.with_untracked(|v| !v.is_empty()) {
                search_value.set(String::new());
            }
        }
    });

    view! {
        <div node_ref=root_ref class=ROOT_CLASS>
            <div class="che-list-header__static">
                {children.map(|children| children())}
            </div>
            <div class="che-list-header__search">
                <span class="che-list-header__icon">{icon("search")}</span>
                <input
                    node_ref=input_ref
                    type="text"
                    class="che-list-header__input"
                    placeholder=move || placeholder.get().unwrap_or_default()
                    prop:value=move || search_value.get()
                    on:input=move |ev| search_value.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // No DOM on the host: both targets are missing, so marker and focus are
    // skipped while the value binding still has to behave.
    fn mount(search: RwSignal<String>, shown: RwSignal<bool>) -> impl IntoView {
        let view = ListHeader(
            ListHeaderProps::builder()
                .search_value(search)
                .is_shown(shown)
                .build(),
        );
        settle();
        view
    }

    fn settle() {
        for _ in 0..8 {
            Executor::poll_local();
        }
    }

    fn with_owner(test: impl FnOnce()) {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();
        test();
    }

    #[test]
    fn test_hide_clears_host_value() {
        with_owner(|| {
            let search = RwSignal::new("abc".to_string());
            let shown = RwSignal::new(false);
            let _view = mount(search, shown);
            assert_eq!(search.get_untracked(), "abc");

            shown.set(true);
            settle();
            assert_eq!(search.get_untracked(), "abc");

            search.set("typed".to_string());
            settle();
            shown.set(false);
            settle();
            assert_eq!(search.get_untracked(), "");
        });
    }

    #[test]
    fn test_value_primed_while_hidden_survives_repeated_hide() {
        with_owner(|| {
            let search = RwSignal::new(String::new());
            let shown = RwSignal::new(true);
            let _view = mount(search, shown);

            shown.set(false);
            settle();
            search.set("primed".to_string());
            settle();
            shown.set(false);
            settle();
            assert_eq!(search.get_untracked(), "primed");
        });
    }

    #[test]
    fn test_hide_with_empty_value_does_not_notify_host() {
        with_owner(|| {
            let search = RwSignal::new(String::new());
            let shown = RwSignal::new(true);
            let writes = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&writes);
            Effect::new(move |_| {
                search.track();
                counter.fetch_add(1, Ordering::SeqCst);
            });
            let _view = mount(search, shown);
            let after_mount = writes.load(Ordering::SeqCst);

            shown.set(false);
            settle();
            assert_eq!(writes.load(Ordering::SeqCst), after_mount);
            assert_eq!(search.get_untracked(), "");
        });
    }
}
