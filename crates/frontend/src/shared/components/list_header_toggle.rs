use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Toolbar button that opens and closes the search box of a [`ListHeader`]
///
/// [`ListHeader`]: super::list_header::ListHeader
#[component]
pub fn ListHeaderToggle(
    /// Flag passed to `ListHeader` as `is_shown`
    is_shown: RwSignal<bool>,
    /// Tooltip text
    #[prop(optional, into)]
    title: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <span title=move || title.get().unwrap_or_else(|| "Search".to_string())>
            <Button
                size=ButtonSize::Small
                appearance=move || if is_shown.get() { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                on_click=move |_| is_shown.update(|shown| *shown = !*shown)
            >
                {move || if is_shown.get() { icon("x") } else { icon("search") }}
            </Button>
        </span>
    }
}
