use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config::SiteConfig;

/// Whether an element whose top edge sits at `top` (viewport coordinates)
/// has come far enough into a viewport `viewport_height` tall.
pub fn in_view(top: f64, viewport_height: f64, offset: f64) -> bool {
    top <= viewport_height - offset
}

/// Once shown, stays shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    shown: bool,
}

impl RevealLatch {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Returns true only on the observation that flips the latch.
    pub fn observe(&mut self, top: f64, viewport_height: f64, offset: f64) -> bool {
        if self.shown || !in_view(top, viewport_height, offset) {
            return false;
        }
        self.shown = true;
        true
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Transition delay, for staggering siblings.
    #[prop_or_default]
    pub delay_ms: Option<u32>,
    #[prop_or_default]
    pub children: Children,
}

fn observe(node: &NodeRef, latch: &RefCell<RevealLatch>, visible: &UseStateHandle<bool>, offset: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = node.cast::<Element>() else {
        return;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .or_else(|| {
            window
                .document()
                .and_then(|d| d.document_element())
                .map(|el| el.client_height() as f64)
        })
        .unwrap_or(0.0);

    let top = element.get_bounding_client_rect().top();
    if latch.borrow_mut().observe(top, viewport_height, offset) {
        visible.set(true);
    }
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let node = use_node_ref();
    let visible = use_state(|| false);
    let latch = use_mut_ref(RevealLatch::default);

    {
        let node = node.clone();
        let visible = visible.clone();
        let latch: Rc<RefCell<RevealLatch>> = latch.clone();
        use_effect_with_deps(
            move |offset| {
                let offset = *offset;
                // check once on mount, before any scrolling happens
                observe(&node, &latch, &visible, offset);

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        observe(&node, &latch, &visible, offset);
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
            config.reveal_offset,
        );
    }

    let style = props
        .delay_ms
        .map(|ms| format!("transition-delay: {}ms;", ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), (*visible).then(|| "visible"))}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_viewport_minus_offset() {
        assert!(in_view(700.0, 800.0, 100.0));
        assert!(!in_view(700.1, 800.0, 100.0));
        assert!(in_view(-300.0, 800.0, 100.0));
    }

    #[test]
    fn latch_never_reverts() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(900.0, 800.0, 100.0));
        assert!(!latch.is_shown());

        assert!(latch.observe(400.0, 800.0, 100.0));
        assert!(latch.is_shown());

        // scrolled back above the element
        assert!(!latch.observe(1500.0, 800.0, 100.0));
        assert!(latch.is_shown());
    }

    #[test]
    fn latch_reports_the_flip_once() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(0.0, 800.0, 100.0));
        assert!(!latch.observe(0.0, 800.0, 100.0));
    }
}
