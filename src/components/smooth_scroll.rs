use log::info;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::SiteConfig;

/// Target id of an in-page link, `"#contacto"` -> `"contacto"`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// In-page target of `href`, but only when `exists` finds that section.
/// Anything else is left to the browser's normal navigation.
pub fn anchor_target(href: &str, exists: impl Fn(&str) -> bool) -> Option<&str> {
    anchor_id(href).filter(|&id| exists(id))
}

pub fn section_exists(id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some()
}

/// Scroll position that puts an element `offset_top` from the page top just
/// below a fixed bar `bar_height` tall.
pub fn scroll_top_for(offset_top: f64, bar_height: f64) -> f64 {
    (offset_top - bar_height).max(0.0)
}

/// Smoothly scrolls to the element with `id`. Returns false if there is no
/// such element.
pub fn scroll_to_section(id: &str, bar_height: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let target = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let Some(target) = target else {
        info!("No section #{} to scroll to", id);
        return false;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_top_for(target.offset_top() as f64, bar_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Runs before scrolling, e.g. to close the mobile menu.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// `<a href="#...">` that glides to its section instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let onclick = {
        let href = props.href.clone();
        let extra = props.onclick.clone();
        let bar_height = config.anchor_offset;
        Callback::from(move |e: MouseEvent| {
            let target = anchor_target(&href, section_exists);
            if target.is_some() {
                e.prevent_default();
            }
            if let Some(extra) = &extra {
                extra.emit(e);
            }
            if let Some(id) = target {
                scroll_to_section(id, bar_height);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_id_only_for_in_page_links() {
        assert_eq!(anchor_id("#contacto"), Some("contacto"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("https://wa.me/57300"), None);
        assert_eq!(anchor_id("/privacidad"), None);
    }

    #[test]
    fn missing_section_falls_back_to_navigation() {
        let on_home = |id: &str| matches!(id, "inicio" | "contacto");
        let elsewhere = |_: &str| false;
        assert_eq!(anchor_target("#contacto", on_home), Some("contacto"));
        assert_eq!(anchor_target("#servicios", on_home), None);
        assert_eq!(anchor_target("#contacto", elsewhere), None);
        assert_eq!(anchor_target("/", on_home), None);
    }

    #[test]
    fn scroll_target_leaves_room_for_navbar() {
        assert_eq!(scroll_top_for(1200.0, 70.0), 1130.0);
        assert_eq!(scroll_top_for(40.0, 70.0), 0.0);
    }
}
