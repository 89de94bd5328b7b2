use crate::constants::HINT_OVERLAY_ID;
use room_core::controls::hint_text;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(HINT_OVERLAY_ID)
        .map(|el| {
            el.class_list().contains("hidden")
                || el
                    .get_attribute("style")
                    .map(|s| s.contains("display:none"))
                    .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Refresh the hint overlay with the current scene state
pub fn update_hint(document: &web::Document, paused: bool, ball_count: usize, volume: f32) {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        el.set_text_content(Some(&hint_text(paused, ball_count, volume)));
    }
}
