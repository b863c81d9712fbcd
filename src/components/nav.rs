use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::smooth_scroll::AnchorLink;
use crate::config::SiteConfig;

/// Page sections in document order, with their menu labels.
pub const SECTIONS: [(&str, &str); 5] = [
    ("inicio", "Inicio"),
    ("beneficios", "Beneficios"),
    ("servicios", "Servicios"),
    ("nosotros", "Nosotros"),
    ("contacto", "Contacto"),
];

/// Section the visitor is reading: the last one, in document order, whose
/// top is within `offset` of the scroll position.
pub fn active_section<'a>(sections: &[(&'a str, f64)], scroll_y: f64, offset: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - offset)
        .last()
        .map(|(id, _)| *id)
}

fn section_offsets() -> Vec<(String, f64)> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| (el.id(), el.offset_top() as f64))
        .collect()
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active = use_state(|| None::<String>);

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        let threshold = config.nav_scrolled_at;
        let section_offset = config.section_offset;
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
                            return;
                        };
                        is_scrolled.set(scroll_y > threshold);

                        let offsets = section_offsets();
                        let sections: Vec<(&str, f64)> =
                            offsets.iter().map(|(id, top)| (id.as_str(), *top)).collect();
                        active.set(active_section(&sections, scroll_y, section_offset).map(str::to_string));
                    });
                    let _ = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    html! {
        <nav id="navbar" class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        height: 70px;
                        z-index: 1000;
                        display: flex;
                        align-items: center;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .navbar.scrolled {
                        background: rgba(20, 20, 20, 0.95);
                        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.3);
                    }
                    .nav-container {
                        width: 100%;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        color: #fff;
                        font-weight: 800;
                        font-size: 1.4rem;
                        text-decoration: none;
                    }
                    .nav-menu {
                        display: flex;
                        gap: 2rem;
                        list-style: none;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.85);
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .nav-link.active, .nav-link:hover { color: #ff6b35; }
                    .hamburger {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .hamburger span {
                        display: block;
                        width: 25px;
                        height: 3px;
                        margin: 5px 0;
                        background: #fff;
                        transition: 0.3s;
                    }
                    @media (max-width: 768px) {
                        .hamburger { display: block; }
                        .hamburger.active span:nth-child(1) { transform: rotate(45deg) translate(6px, 6px); }
                        .hamburger.active span:nth-child(2) { opacity: 0; }
                        .hamburger.active span:nth-child(3) { transform: rotate(-45deg) translate(6px, -6px); }
                        .nav-menu {
                            position: fixed;
                            top: 70px;
                            left: -100%;
                            width: 100%;
                            flex-direction: column;
                            background: rgba(20, 20, 20, 0.98);
                            padding: 2rem;
                            transition: left 0.3s ease;
                        }
                        .nav-menu.active { left: 0; }
                    }
                "#}
            </style>
            <div class="nav-container">
                <AnchorLink href="#inicio" class={classes!("nav-logo")}>{ config.brand.clone() }</AnchorLink>
                <ul id="navMenu" class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for SECTIONS.iter().map(|(id, label)| {
                        let on_link = {
                            let menu_open = menu_open.clone();
                            let active = active.clone();
                            let id = id.to_string();
                            Callback::from(move |_: MouseEvent| {
                                menu_open.set(false);
                                active.set(Some(id.clone()));
                            })
                        };
                        let is_active = active.as_deref() == Some(*id);
                        html! {
                            <li>
                                <AnchorLink
                                    href={format!("#{}", id)}
                                    class={classes!("nav-link", is_active.then(|| "active"))}
                                    onclick={on_link}
                                >
                                    { *label }
                                </AnchorLink>
                            </li>
                        }
                    }) }
                </ul>
                <button
                    id="hamburger"
                    class={classes!("hamburger", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                    aria-label="Menú"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: [(&str, f64); 3] = [("inicio", 0.0), ("servicios", 900.0), ("contacto", 2000.0)];

    #[test]
    fn picks_last_section_reached() {
        assert_eq!(active_section(&PAGE, 0.0, 200.0), Some("inicio"));
        assert_eq!(active_section(&PAGE, 699.0, 200.0), Some("inicio"));
        assert_eq!(active_section(&PAGE, 700.0, 200.0), Some("servicios"));
        assert_eq!(active_section(&PAGE, 5000.0, 200.0), Some("contacto"));
    }

    #[test]
    fn nothing_active_above_first_section() {
        let sections = [("servicios", 900.0)];
        assert_eq!(active_section(&sections, 100.0, 200.0), None);
        assert_eq!(active_section(&[], 100.0, 200.0), None);
    }

    #[test]
    fn menu_lists_every_section_once() {
        let mut ids: Vec<_> = SECTIONS.iter().map(|(id, _)| *id).collect();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
    }
}
