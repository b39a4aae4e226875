use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::models::Section;

/// Smooth-scrolls the section's anchor into view. Does nothing when the
/// anchor is not in the document.
pub fn scroll_to_section(section: Section) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()))
    else {
        return;
    };

    debug!("Scrolling to #{}", section.anchor());
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Runs once on mount: honours a `#section` fragment in the URL, otherwise
/// starts at the top of the page.
pub fn restore_anchor() {
    let section = window()
        .and_then(|w| w.location().hash().ok())
        .and_then(|hash| hash.parse::<Section>().ok());

    match section {
        Some(section) => scroll_to_section(section),
        None => scroll_to_top(),
    }
}
