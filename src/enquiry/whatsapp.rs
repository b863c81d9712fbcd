use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use log::info;

use super::message::{compose, deep_link};
use super::submit::{Dispatch, Receipt};
use super::validate::Enquiry;
use crate::config::SiteConfig;
use crate::error::SubmitError;

/// Sends the enquiry by opening a WhatsApp chat with the message prefilled.
///
/// There is no backend to acknowledge anything, so the short wait before
/// opening the link only stands in for one.
#[derive(Debug, Clone, PartialEq)]
pub struct WhatsAppDispatcher {
    brand: String,
    service_url: String,
    recipient: String,
    delay_ms: u32,
}

impl WhatsAppDispatcher {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            brand: config.brand.clone(),
            service_url: config.messaging_url.clone(),
            recipient: config.recipient.clone(),
            delay_ms: config.submit_delay_ms,
        }
    }

    pub fn link_for(&self, enquiry: &Enquiry) -> String {
        deep_link(
            &self.service_url,
            &self.recipient,
            &compose(&self.brand, enquiry),
        )
    }
}

#[async_trait(?Send)]
impl Dispatch for WhatsAppDispatcher {
    async fn dispatch(&self, enquiry: &Enquiry) -> Result<Receipt, SubmitError> {
        TimeoutFuture::new(self.delay_ms).await;

        let link = self.link_for(enquiry);
        let window = web_sys::window().ok_or(SubmitError::NoWindow)?;
        match window.open_with_url_and_target(&link, "_blank") {
            Ok(Some(_)) => {
                info!("Opened WhatsApp chat with {}", self.recipient);
                Ok(Receipt { link })
            }
            Ok(None) => Err(SubmitError::PopupBlocked),
            Err(e) => Err(SubmitError::Browser(format!("{:?}", e))),
        }
    }
}
