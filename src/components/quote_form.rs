use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::Notifier;
use crate::config::SiteConfig;
use crate::enquiry::submit::{reset_after, submit, Rejected, SubmitPhase};
use crate::enquiry::validate::{validate_training, Field, FieldErrors, FormValues, TrainingType};
use crate::enquiry::whatsapp::WhatsAppDispatcher;

const ERROR_BORDER: &str = "border-color: #e74c3c;";

/// Enter submits the form from any control except the message box, where it
/// should insert a newline. We swallow it everywhere else.
pub fn blocks_enter(key: &str, target_tag: &str) -> bool {
    key == "Enter" && !target_tag.eq_ignore_ascii_case("textarea")
}

#[function_component(QuoteForm)]
pub fn quote_form() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let notifier = use_context::<Notifier>().unwrap_or_default();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let training = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(FieldErrors::default);
    let phase = use_state(SubmitPhase::default);

    let values = FormValues {
        name: (*name).clone(),
        email: (*email).clone(),
        phone: (*phone).clone(),
        training: (*training).clone(),
        message: (*message).clone(),
    };

    let on_text = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    // live feedback once the visitor leaves a field
    let validate_on_blur = |field: Field| {
        let errors = errors.clone();
        let values = values.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*errors).clone();
            next.set(field, values.check(field));
            errors.set(next);
        })
    };

    let on_training = {
        let training = training.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            let mut next = (*errors).clone();
            next.set(Field::Training, validate_training(&value).map(|_| ()));
            errors.set(next);
            training.set(value);
        })
    };

    let on_keydown = Callback::from(|e: KeyboardEvent| {
        let tag = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .map(|el| el.tag_name())
            .unwrap_or_default();
        if blocks_enter(&e.key(), &tag) {
            e.prevent_default();
        }
    });

    let onsubmit = {
        let values = values.clone();
        let fields = [
            name.clone(),
            email.clone(),
            phone.clone(),
            training.clone(),
            message.clone(),
        ];
        let errors = errors.clone();
        let phase = phase.clone();
        let notifier = notifier.clone();
        let dispatcher = WhatsAppDispatcher::from_config(&config);
        let reset_ms = config.reset_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if phase.is_busy() {
                return;
            }

            let values = values.clone();
            let fields = fields.clone();
            let errors = errors.clone();
            let phase = phase.clone();
            let notifier = notifier.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let result = submit(&values, &dispatcher, &notifier, |p| phase.set(p)).await;
                match result {
                    Ok(_) => {
                        errors.set(FieldErrors::default());
                        let blank =
                            reset_after(TimeoutFuture::new(reset_ms), |p| phase.set(p)).await;
                        let [name, email, phone, training, message] = fields;
                        name.set(blank.name);
                        email.set(blank.email);
                        phone.set(blank.phone);
                        training.set(blank.training);
                        message.set(blank.message);
                    }
                    Err(rejected) => {
                        gloo_console::error!(format!("Quote not sent: {}", rejected));
                        if let Rejected::Invalid(found) = rejected {
                            errors.set(found);
                        }
                    }
                }
            });
        })
    };

    let error_text = |field: Field| errors.get(field).map(|e| e.to_string());
    let border = |field: Field| errors.get(field).map(|_| ERROR_BORDER);
    let error_slot = |id: &'static str, field: Field| {
        let text = error_text(field);
        html! {
            <span
                id={id}
                class="error-message"
                style={if text.is_some() { "display: block;" } else { "display: none;" }}
            >
                { text.unwrap_or_default() }
            </span>
        }
    };
    let busy = phase.is_busy();

    html! {
        <form id="quoteForm" class="quote-form" {onsubmit} onkeydown={on_keydown} novalidate=true>
            <style>
                {r#"
                    .quote-form {
                        display: grid;
                        gap: 1.25rem;
                        background: #fff;
                        padding: 2.5rem;
                        border-radius: 16px;
                        box-shadow: 0 10px 40px rgba(0, 0, 0, 0.1);
                    }
                    .form-group {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                    }
                    .form-group label {
                        font-weight: 600;
                        color: #333;
                    }
                    .form-group input,
                    .form-group select,
                    .form-group textarea {
                        padding: 0.85rem 1rem;
                        border: 2px solid #e0e0e0;
                        border-radius: 10px;
                        font-size: 1rem;
                        font-family: inherit;
                        transition: border-color 0.3s ease;
                    }
                    .form-group input:focus,
                    .form-group select:focus,
                    .form-group textarea:focus {
                        outline: none;
                        border-color: #ff6b35;
                    }
                    .error-message {
                        color: #e74c3c;
                        font-size: 0.85rem;
                    }
                    .btn-submit {
                        display: inline-flex;
                        justify-content: center;
                        align-items: center;
                        gap: 10px;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 50px;
                        background: linear-gradient(135deg, #ff6b35, #f7931e);
                        color: #fff;
                        font-size: 1.05rem;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .btn-submit:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                    .btn-submit .loading-spinner {
                        display: none;
                        width: 18px;
                        height: 18px;
                        border: 3px solid rgba(255,255,255,.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s ease-in-out infinite;
                    }
                    .btn-submit.loading .loading-spinner { display: inline-block; }
                    @keyframes spin { to { transform: rotate(360deg); } }
                "#}
            </style>

            <div class="form-group">
                <label for="nombre">{"Nombre completo *"}</label>
                <input
                    id="nombre"
                    type="text"
                    placeholder="Tu nombre"
                    value={(*name).clone()}
                    style={border(Field::Name)}
                    oninput={on_text(&name)}
                    onblur={validate_on_blur(Field::Name)}
                />
                { error_slot("errorNombre", Field::Name) }
            </div>

            <div class="form-group">
                <label for="email">{"Correo electrónico *"}</label>
                <input
                    id="email"
                    type="email"
                    placeholder="tu@correo.com"
                    value={(*email).clone()}
                    style={border(Field::Email)}
                    oninput={on_text(&email)}
                    onblur={validate_on_blur(Field::Email)}
                />
                { error_slot("errorEmail", Field::Email) }
            </div>

            <div class="form-group">
                <label for="telefono">{"Teléfono *"}</label>
                <input
                    id="telefono"
                    type="tel"
                    placeholder="3001234567"
                    value={(*phone).clone()}
                    style={border(Field::Phone)}
                    oninput={on_text(&phone)}
                    onblur={validate_on_blur(Field::Phone)}
                />
                { error_slot("errorTelefono", Field::Phone) }
            </div>

            <div class="form-group">
                <label for="tipoEntrenamiento">{"Tipo de entrenamiento *"}</label>
                <select
                    id="tipoEntrenamiento"
                    style={border(Field::Training)}
                    onchange={on_training}
                >
                    <option value="" selected={training.is_empty()}>{"Selecciona una opción"}</option>
                    { for TrainingType::ALL.iter().map(|t| html! {
                        <option value={t.value()} selected={*training == t.value()}>{ t.label() }</option>
                    }) }
                </select>
                { error_slot("errorTipo", Field::Training) }
            </div>

            <div class="form-group">
                <label for="mensaje">{"Mensaje"}</label>
                <textarea
                    id="mensaje"
                    rows="4"
                    placeholder="Cuéntanos tus objetivos, horarios o dudas"
                    value={(*message).clone()}
                    oninput={on_message}
                />
            </div>

            <button
                type="submit"
                class={classes!("btn-submit", busy.then(|| "loading"))}
                disabled={busy}
            >
                <span class="loading-spinner"></span>
                <span>{ if busy { "Enviando..." } else { "Solicitar cotización" } }</span>
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_is_swallowed_outside_the_message_box() {
        assert!(blocks_enter("Enter", "INPUT"));
        assert!(blocks_enter("Enter", "SELECT"));
        assert!(!blocks_enter("Enter", "TEXTAREA"));
        assert!(!blocks_enter("a", "INPUT"));
        assert!(!blocks_enter("Tab", "INPUT"));
    }
}
