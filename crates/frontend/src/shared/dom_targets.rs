//! DOM-backed implementations of the list header ports.

use contracts::shared::list_header::SEARCH_ACTIVE_CLASS;
use contracts::{FocusTarget, PresentationTarget, TargetError};
use leptos::html::{Div, Input};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Root container of a mounted list header
#[derive(Clone, Copy)]
pub struct RootTarget(pub NodeRef<Div>);

/// Search input of a mounted list header
#[derive(Clone, Copy)]
pub struct InputTarget(pub NodeRef<Input>);

impl PresentationTarget for RootTarget {
    fn set_active(&self, active: bool) -> Result<(), TargetError> {
        let root = self.0.get_untracked().ok_or(TargetError::RootMissing)?;
        let classes = root.class_list();
        let result = if active {
            classes.add_1(SEARCH_ACTIVE_CLASS)
        } else {
            classes.remove_1(SEARCH_ACTIVE_CLASS)
        };
        result.map_err(dom_error)
    }
}

impl FocusTarget for InputTarget {
    fn focus(&self) -> Result<(), TargetError> {
        let input = self.0.get_untracked().ok_or(TargetError::InputMissing)?;
        input.focus().map_err(dom_error)
    }
}

fn dom_error(err: JsValue) -> TargetError {
    TargetError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
