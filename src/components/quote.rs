use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::SiteConfig;

pub const QUOTES: [&str; 8] = [
    "La disciplina supera al talento",
    "Tu cuerpo puede, tu mente manda",
    "Cada día es una oportunidad para ser mejor",
    "El dolor es temporal, el orgullo es para siempre",
    "No te rindas, el comienzo es siempre lo más difícil",
    "La única mala sesión es la que no hiciste",
    "Transforma tu cuerpo, transforma tu vida",
    "Los límites solo existen en tu mente",
];

/// Position in a fixed list, wrapping at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteCycle {
    len: usize,
    current: usize,
}

impl QuoteCycle {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn advance(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            len: self.len,
            current: (self.current + 1) % self.len,
        }
    }
}

impl Reducible for QuoteCycle {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(self.advance())
    }
}

#[function_component(QuoteRotator)]
pub fn quote_rotator() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let cycle = use_reducer(|| QuoteCycle::new(QUOTES.len()));

    {
        let cycle = cycle.clone();
        use_effect_with_deps(
            move |interval_ms| {
                let interval = Interval::new(*interval_ms, move || {
                    cycle.dispatch(());
                });
                move || drop(interval)
            },
            config.quote_interval_ms,
        );
    }

    let index = cycle.current();
    html! {
        <>
            <style>
                {r#"
                    .motivational-quote {
                        display: inline-block;
                        animation: fadeInOut 3s ease-in-out;
                    }
                    @keyframes fadeInOut {
                        0% { opacity: 0; transform: translateY(10px); }
                        20%, 80% { opacity: 1; transform: translateY(0); }
                        100% { opacity: 0.85; }
                    }
                "#}
            </style>
            <p class="motivational-quote-wrapper">
                // keyed so the fade animation restarts on every change
                <span key={index} class="motivational-quote">{ QUOTES[index] }</span>
            </p>
        </>
    }
}
