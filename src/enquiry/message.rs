use super::validate::Enquiry;

const NO_MESSAGE: &str = "Sin mensaje adicional";

/// Text sent to the trainer's WhatsApp. Uses WhatsApp's `*bold*` markup.
pub fn compose(brand: &str, enquiry: &Enquiry) -> String {
    format!(
        "🏋️ *Nueva Cotización - {brand}*\n\
         \n\
         👤 *Nombre:* {name}\n\
         📧 *Email:* {email}\n\
         📱 *Teléfono:* {phone}\n\
         🎯 *Tipo de Entrenamiento:* {training}\n\
         \n\
         💬 *Mensaje:*\n\
         {message}",
        brand = brand,
        name = enquiry.name,
        email = enquiry.email,
        phone = enquiry.phone,
        training = enquiry.training.label(),
        message = enquiry.message.as_deref().unwrap_or(NO_MESSAGE),
    )
}

/// `https://<service>/<recipient>?text=<encoded>`
pub fn deep_link(service_url: &str, recipient: &str, text: &str) -> String {
    format!(
        "{}/{}?text={}",
        service_url.trim_end_matches('/'),
        recipient,
        urlencoding::encode(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enquiry::validate::TrainingType;

    fn enquiry() -> Enquiry {
        Enquiry {
            name: "Carlos Pérez".to_string(),
            email: "carlos@mail.com".to_string(),
            phone: "3101234567".to_string(),
            training: TrainingType::MuscleGain,
            message: Some("Quiero entrenar 3 veces & ganar fuerza?".to_string()),
        }
    }

    #[test]
    fn compose_embeds_every_value() {
        let text = compose("Elite Training", &enquiry());
        assert!(text.starts_with("🏋️ *Nueva Cotización - Elite Training*\n\n"));
        assert!(text.contains("👤 *Nombre:* Carlos Pérez\n"));
        assert!(text.contains("📧 *Email:* carlos@mail.com\n"));
        assert!(text.contains("📱 *Teléfono:* 3101234567\n"));
        assert!(text.contains("🎯 *Tipo de Entrenamiento:* Ganancia de Masa Muscular\n"));
        assert!(text.ends_with("💬 *Mensaje:*\nQuiero entrenar 3 veces & ganar fuerza?"));
    }

    #[test]
    fn compose_without_message_uses_placeholder() {
        let mut e = enquiry();
        e.message = None;
        assert!(compose("Elite Training", &e).ends_with("*Mensaje:*\nSin mensaje adicional"));
    }

    #[test]
    fn deep_link_encodes_text_parameter() {
        let text = compose("Elite Training", &enquiry());
        let link = deep_link("https://wa.me/", "573001234567", &text);

        let (base, encoded) = link.split_once("?text=").unwrap();
        assert_eq!(base, "https://wa.me/573001234567");
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('\n'));
        assert_eq!(urlencoding::decode(encoded).unwrap(), text);
    }
}
