use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::quote::QuoteRotator;
use crate::components::quote_form::QuoteForm;
use crate::components::reveal::Reveal;
use crate::components::smooth_scroll::{scroll_to_section, AnchorLink};
use crate::config::SiteConfig;
use crate::enquiry::validate::TrainingType;

const BENEFITS: [(&str, &str, &str); 4] = [
    ("fas fa-dumbbell", "Planes a tu medida", "Rutinas diseñadas para tu nivel, tus objetivos y tu tiempo disponible."),
    ("fas fa-apple-alt", "Guía nutricional", "Alimentación práctica que acompaña tu entrenamiento, sin dietas imposibles."),
    ("fas fa-chart-line", "Seguimiento real", "Medimos tu progreso cada semana y ajustamos el plan cuando hace falta."),
    ("fas fa-clock", "Horarios flexibles", "Entrena en el gimnasio, en casa o en línea cuando mejor te quede."),
];

fn service_blurb(training: TrainingType) -> &'static str {
    match training {
        TrainingType::Personal => "Sesiones uno a uno con un entrenador certificado.",
        TrainingType::Functional => "Fuerza, movilidad y resistencia para el día a día.",
        TrainingType::WeightLoss => "Entrenamiento metabólico y hábitos sostenibles.",
        TrainingType::MuscleGain => "Programas de hipertrofia con progresión medida.",
        TrainingType::Online => "Tu plan y seguimiento desde cualquier lugar.",
    }
}

fn render_hero(brand: &str, on_indicator: Callback<MouseEvent>) -> Html {
    html! {
        <section id="inicio" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">{ brand.to_string() }</h1>
                <p class="hero-subtitle">{"Entrenamiento personal que transforma cuerpo y mente"}</p>
                <QuoteRotator />
                <AnchorLink href="#contacto" class={classes!("btn-primary")}>
                    {"Solicita tu cotización"}
                </AnchorLink>
            </div>
            <div class="scroll-indicator" onclick={on_indicator}>
                <i class="fas fa-chevron-down"></i>
            </div>
        </section>
    }
}

fn render_benefits() -> Html {
    html! {
        <section id="beneficios" class="benefits">
            <Reveal>
                <h2 class="section-title">{"¿Por qué entrenar con nosotros?"}</h2>
            </Reveal>
            <div class="card-grid">
                { for BENEFITS.iter().enumerate().map(|(i, (icon, title, text))| html! {
                    <Reveal class={classes!("card")} delay_ms={(i as u32) * 100}>
                        <i class={*icon}></i>
                        <h3>{ *title }</h3>
                        <p>{ *text }</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

fn render_services() -> Html {
    html! {
        <section id="servicios" class="services">
            <Reveal>
                <h2 class="section-title">{"Nuestros servicios"}</h2>
            </Reveal>
            <div class="card-grid">
                { for TrainingType::ALL.iter().enumerate().map(|(i, t)| html! {
                    <Reveal class={classes!("card", "service-card")} delay_ms={(i as u32) * 100}>
                        <h3>{ t.label() }</h3>
                        <p>{ service_blurb(*t) }</p>
                        <AnchorLink href="#contacto" class={classes!("card-link")}>{"Cotizar"}</AnchorLink>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

fn render_about() -> Html {
    html! {
        <section id="nosotros" class="about">
            <Reveal class={classes!("about-text")}>
                <h2 class="section-title">{"Sobre nosotros"}</h2>
                <p>
                    {"Somos un equipo de entrenadores certificados con más de diez años acompañando a personas \
                      que quieren sentirse mejor. Creemos en el trabajo constante, la técnica correcta y los \
                      resultados que se mantienen."}
                </p>
            </Reveal>
        </section>
    }
}

fn render_contact() -> Html {
    html! {
        <section id="contacto" class="contact">
            <Reveal>
                <h2 class="section-title">{"Solicita tu cotización"}</h2>
                <p class="section-subtitle">
                    {"Completa el formulario y te responderemos por WhatsApp con una propuesta para ti."}
                </p>
            </Reveal>
            <Reveal class={classes!("form-wrapper")} delay_ms={150}>
                <QuoteForm />
            </Reveal>
        </section>
    }
}

#[function_component]
pub fn Home() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let on_indicator = {
        let bar_height = config.anchor_offset;
        Callback::from(move |_: MouseEvent| {
            scroll_to_section("beneficios", bar_height);
        })
    };

    html! {
        <>
            <style>
                {r#"
                    * { box-sizing: border-box; }
                    body {
                        margin: 0;
                        font-family: 'Poppins', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                        color: #222;
                        background: #fafafa;
                    }
                    section { padding: 6rem 2rem; }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                        color: #fff;
                        background: linear-gradient(rgba(0,0,0,0.6), rgba(0,0,0,0.6));
                        position: relative;
                    }
                    .hero-title { font-size: 3.5rem; margin: 0 0 1rem; }
                    .hero-subtitle { font-size: 1.3rem; opacity: 0.9; }
                    .motivational-quote-wrapper {
                        min-height: 2.5rem;
                        font-size: 1.4rem;
                        font-style: italic;
                        color: #ff6b35;
                    }
                    .btn-primary {
                        display: inline-block;
                        margin-top: 1.5rem;
                        padding: 1rem 2.5rem;
                        border-radius: 50px;
                        background: linear-gradient(135deg, #ff6b35, #f7931e);
                        color: #fff;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        font-size: 1.5rem;
                        cursor: pointer;
                        animation: bounce 2s infinite;
                    }
                    @keyframes bounce {
                        0%, 20%, 50%, 80%, 100% { transform: translateY(0); }
                        40% { transform: translateY(-10px); }
                        60% { transform: translateY(-5px); }
                    }
                    .section-title { text-align: center; font-size: 2.4rem; margin-bottom: 1rem; }
                    .section-subtitle { text-align: center; color: #666; }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2rem;
                        max-width: 1200px;
                        margin: 3rem auto 0;
                    }
                    .card {
                        background: #fff;
                        padding: 2rem;
                        border-radius: 16px;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                    }
                    .card i { font-size: 2rem; color: #ff6b35; }
                    .card-link { color: #ff6b35; font-weight: 600; text-decoration: none; }
                    .about-text { max-width: 800px; margin: 0 auto; text-align: center; line-height: 1.8; }
                    .contact { background: #f0f0f0; }
                    .form-wrapper { max-width: 640px; margin: 2rem auto 0; }
                    .reveal {
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .footer {
                        background: #141414;
                        color: rgba(255, 255, 255, 0.8);
                        text-align: center;
                        padding: 3rem 2rem;
                    }
                    .footer-links { display: flex; justify-content: center; gap: 1.5rem; flex-wrap: wrap; }
                    .footer a { color: rgba(255, 255, 255, 0.8); text-decoration: none; }
                    .footer-whatsapp { display: inline-block; margin: 1.5rem 0; color: #25d366 !important; }
                    @media (max-width: 768px) {
                        .hero-title { font-size: 2.4rem; }
                        section { padding: 4rem 1.25rem; }
                    }
                "#}
            </style>
            <Nav />
            { render_hero(&config.brand, on_indicator) }
            { render_benefits() }
            { render_services() }
            { render_about() }
            { render_contact() }
            <Footer />
        </>
    }
}
