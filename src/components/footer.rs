use chrono::Datelike;
use yew::prelude::*;

use crate::components::nav::SECTIONS;
use crate::components::smooth_scroll::AnchorLink;
use crate::config::SiteConfig;

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer-links">
                { for SECTIONS.iter().map(|(id, label)| html! {
                    <AnchorLink href={format!("#{}", id)}>{ *label }</AnchorLink>
                }) }
            </div>
            <a
                class="footer-whatsapp"
                href={format!("{}/{}", config.messaging_url.trim_end_matches('/'), config.recipient)}
                target="_blank"
                rel="noopener"
            >
                <i class="fab fa-whatsapp"></i>{" Escríbenos por WhatsApp"}
            </a>
            <p>{ format!("© {} {}. Todos los derechos reservados.", year, config.brand) }</p>
        </footer>
    }
}
