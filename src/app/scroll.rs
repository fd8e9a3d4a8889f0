use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::sections::{SectionExtent, SectionId};

/// Smooth-scroll to a section anchor. Returns false if the section is not
/// in the document.
pub fn scroll_to_section(id: SectionId) -> bool {
    let Some(el) = document().get_element_by_id(id.anchor()) else {
        log::debug!("no element for section {id}");
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Current document extents of every mounted section, in page order.
pub fn measure_sections() -> Vec<SectionExtent> {
    SectionId::ALL
        .into_iter()
        .filter_map(|id| {
            let el = document()
                .get_element_by_id(id.anchor())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionExtent::new(
                id,
                f64::from(el.offset_top()),
                f64::from(el.offset_height()),
            ))
        })
        .collect()
}
