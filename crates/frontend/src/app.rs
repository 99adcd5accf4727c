//! Demo host: a workspace list whose toolbar drives a `ListHeader`.

use crate::shared::components::{ListHeader, ListHeaderToggle};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ignore_case, filter_list, highlight_matches, Searchable};
use chrono::NaiveDate;
use contracts::ListHeaderConfig;
use leptos::prelude::*;
use uuid::Uuid;

const HEADER_CONFIG: &str =
    r#"{"placeholder":"Search workspaces","searchValue":"","isShown":false}"#;

#[derive(Clone, Debug, PartialEq)]
pub struct WorkspaceRow {
    pub id: Uuid,
    pub name: String,
    pub stack: String,
    pub updated: NaiveDate,
}

impl WorkspaceRow {
    fn new(name: &str, stack: &str, updated: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            stack: stack.to_string(),
            updated,
        }
    }
}

impl Searchable for WorkspaceRow {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.name, filter) || contains_ignore_case(&self.stack, filter)
    }
}

fn demo_rows() -> Vec<WorkspaceRow> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        WorkspaceRow::new("billing-api", "Java", date(2016, 3, 14)),
        WorkspaceRow::new("dashboard", "Node", date(2016, 4, 2)),
        WorkspaceRow::new("docs-site", "Python", date(2016, 1, 20)),
        WorkspaceRow::new("ingest-worker", "Go", date(2016, 5, 9)),
        WorkspaceRow::new("mobile-backend", "Java", date(2015, 11, 30)),
    ]
}

/// Parses the header configuration, falling back to defaults on bad input.
pub fn load_config(json: &str) -> ListHeaderConfig {
    match ListHeaderConfig::from_json(json) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to load list header config: {}", err);
            ListHeaderConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config(HEADER_CONFIG);
    let search_shown = RwSignal::new(config.is_shown);
    let search = RwSignal::new(config.search_value.clone());

    let rows = StoredValue::new(demo_rows());
    let visible_rows =
        Memo::new(move |_| search.with(|filter| rows.with_value(|rows| filter_list(rows, filter))));

    view! {
        <div class="list-page">
            <div class="list-page__toolbar">
                <h1 class="list-page__title">"Workspaces"</h1>
                <ListHeaderToggle is_shown=search_shown title="Search workspaces" />
            </div>

            <ListHeader
                placeholder=config.placeholder
                search_value=search
                is_shown=search_shown
            >
                <span class="list-page__cell list-page__cell--name">"Name"</span>
                <span class="list-page__cell">"Stack"</span>
                <span class="list-page__cell">"Updated"</span>
            </ListHeader>

            <div class="list-page__rows">
                <For
                    each=move || visible_rows.get()
                    key=|row| row.id
                    children=move |row: WorkspaceRow| {
                        let name = row.name.clone();
                        let stack = row.stack.clone();
                        view! {
                            <div class="list-page__row">
                                <span class="list-page__cell list-page__cell--name">
                                    {icon("item")}
                                    {move || highlight_matches(&name, &search.get())}
                                </span>
                                <span class="list-page__cell">
                                    {move || highlight_matches(&stack, &search.get())}
                                </span>
                                <span class="list-page__cell">{row.updated.format("%Y-%m-%d").to_string()}</span>
                            </div>
                        }
                    }
                />
                <Show when=move || visible_rows.with(|rows| rows.is_empty())>
                    <div class="list-page__empty">"No workspaces match"</div>
                </Show>
            </div>
        </div>
    }
}
