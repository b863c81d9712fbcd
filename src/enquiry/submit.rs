use std::future::Future;

use async_trait::async_trait;
use log::{info, warn};
use thiserror::Error;

use super::validate::{Enquiry, FieldErrors, FormValues};
use crate::components::notification::{Notify, ToastKind};
use crate::error::SubmitError;

pub const INVALID_NOTICE: &str = "Por favor completa todos los campos correctamente";
pub const SUCCESS_NOTICE: &str = "¡Formulario enviado! Redirigiendo a WhatsApp...";

/// Where the quote form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Failed,
    Succeeded,
}

impl SubmitPhase {
    pub fn is_busy(self) -> bool {
        matches!(self, SubmitPhase::Submitting | SubmitPhase::Succeeded)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// The deep link that was opened.
    pub link: String,
}

/// Hands a validated enquiry to whoever receives it.
#[async_trait(?Send)]
pub trait Dispatch {
    async fn dispatch(&self, enquiry: &Enquiry) -> Result<Receipt, SubmitError>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejected {
    #[error("{} campo(s) inválido(s)", .0.len())]
    Invalid(FieldErrors),

    #[error(transparent)]
    Failed(#[from] SubmitError),
}

/// Validates `values` and, if every field passes, dispatches the enquiry.
///
/// `on_phase` sees every transition. An invalid form raises exactly one error
/// toast and never reaches the dispatcher. On success the caller owns the
/// final `Succeeded -> Idle` step, since that waits on the reset delay.
pub async fn submit<D, N, P>(
    values: &FormValues,
    dispatcher: &D,
    notifier: &N,
    mut on_phase: P,
) -> Result<Receipt, Rejected>
where
    D: Dispatch + ?Sized,
    N: Notify + ?Sized,
    P: FnMut(SubmitPhase),
{
    on_phase(SubmitPhase::Validating);
    let enquiry = match values.validate() {
        Ok(enquiry) => enquiry,
        Err(errors) => {
            info!("Quote form rejected with {} invalid field(s)", errors.len());
            on_phase(SubmitPhase::Invalid);
            notifier.notify(ToastKind::Error, INVALID_NOTICE);
            on_phase(SubmitPhase::Idle);
            return Err(Rejected::Invalid(errors));
        }
    };

    on_phase(SubmitPhase::Submitting);
    match dispatcher.dispatch(&enquiry).await {
        Ok(receipt) => {
            info!("Quote dispatched for {}", enquiry.training.label());
            on_phase(SubmitPhase::Succeeded);
            notifier.notify(ToastKind::Success, SUCCESS_NOTICE);
            Ok(receipt)
        }
        Err(e) => {
            warn!("Quote dispatch failed: {}", e);
            on_phase(SubmitPhase::Failed);
            notifier.notify(ToastKind::Error, &e.to_string());
            on_phase(SubmitPhase::Idle);
            Err(e.into())
        }
    }
}

/// The `Succeeded -> Idle` step: once `delay` resolves, moves the phase back
/// to `Idle` and hands back the blank form to show.
pub async fn reset_after<W, P>(delay: W, mut on_phase: P) -> FormValues
where
    W: Future<Output = ()>,
    P: FnMut(SubmitPhase),
{
    delay.await;
    on_phase(SubmitPhase::Idle);
    FormValues::default()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::FutureExt;

    use super::*;
    use crate::enquiry::message::{compose, deep_link};
    use crate::enquiry::validate::Field;

    #[derive(Default)]
    struct RecordingNotifier {
        toasts: RefCell<Vec<(ToastKind, String)>>,
    }

    impl Notify for RecordingNotifier {
        fn notify(&self, kind: ToastKind, message: &str) {
            self.toasts.borrow_mut().push((kind, message.to_string()));
        }
    }

    /// Builds the real deep link but records it instead of opening a window.
    #[derive(Default)]
    struct RecordingDispatcher {
        opened: RefCell<Vec<String>>,
        fail_with: Option<SubmitError>,
    }

    #[async_trait(?Send)]
    impl Dispatch for RecordingDispatcher {
        async fn dispatch(&self, enquiry: &Enquiry) -> Result<Receipt, SubmitError> {
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            let link = deep_link(
                "https://wa.me",
                "573001234567",
                &compose("Elite Training", enquiry),
            );
            self.opened.borrow_mut().push(link.clone());
            Ok(Receipt { link })
        }
    }

    fn filled() -> FormValues {
        FormValues {
            name: "Laura Gómez".to_string(),
            email: "laura@gmail.com".to_string(),
            phone: "3209876543".to_string(),
            training: "online".to_string(),
            message: "Horario en la mañana, por favor".to_string(),
        }
    }

    #[test]
    fn invalid_form_never_dispatches_and_toasts_once() {
        let invalid_forms = [
            FormValues::default(),
            FormValues { name: "Lu".to_string(), ..filled() },
            FormValues { email: "laura@gmail".to_string(), ..filled() },
            FormValues { phone: "12-345".to_string(), ..filled() },
            FormValues { training: String::new(), ..filled() },
        ];

        for values in invalid_forms {
            let dispatcher = RecordingDispatcher::default();
            let notifier = RecordingNotifier::default();
            let mut phases = Vec::new();

            let result = block_on(submit(&values, &dispatcher, &notifier, |p| phases.push(p)));

            assert!(matches!(result, Err(Rejected::Invalid(_))));
            assert!(dispatcher.opened.borrow().is_empty());
            assert_eq!(
                *notifier.toasts.borrow(),
                vec![(ToastKind::Error, INVALID_NOTICE.to_string())]
            );
            assert_eq!(
                phases,
                vec![SubmitPhase::Validating, SubmitPhase::Invalid, SubmitPhase::Idle]
            );
        }
    }

    #[test]
    fn invalid_result_names_the_failing_fields() {
        let values = FormValues { phone: "123".to_string(), ..filled() };
        let dispatcher = RecordingDispatcher::default();
        let notifier = RecordingNotifier::default();

        match block_on(submit(&values, &dispatcher, &notifier, |_| {})) {
            Err(Rejected::Invalid(errors)) => {
                assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Phone]);
            }
            other => panic!("expected invalid, got {:?}", other),
        }
    }

    #[test]
    fn valid_form_opens_one_link_with_the_values() {
        let values = filled();
        let dispatcher = RecordingDispatcher::default();
        let notifier = RecordingNotifier::default();
        let mut phases = Vec::new();

        let receipt = block_on(submit(&values, &dispatcher, &notifier, |p| phases.push(p))).unwrap();

        let opened = dispatcher.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0], receipt.link);

        let encoded = receipt.link.split_once("?text=").unwrap().1;
        let text = urlencoding::decode(encoded).unwrap();
        for value in [&values.name, &values.email, &values.phone, &values.message] {
            assert!(text.contains(value.as_str()), "{value} missing from {text}");
        }
        assert!(text.contains("Entrenamiento Online"));

        assert_eq!(
            *notifier.toasts.borrow(),
            vec![(ToastKind::Success, SUCCESS_NOTICE.to_string())]
        );
        assert_eq!(
            phases,
            vec![
                SubmitPhase::Validating,
                SubmitPhase::Submitting,
                SubmitPhase::Succeeded
            ]
        );
    }

    #[test]
    fn dispatch_failure_reports_and_returns_to_idle() {
        let dispatcher = RecordingDispatcher {
            fail_with: Some(SubmitError::PopupBlocked),
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();
        let mut phases = Vec::new();

        let result = block_on(submit(&filled(), &dispatcher, &notifier, |p| phases.push(p)));

        assert_eq!(result, Err(Rejected::Failed(SubmitError::PopupBlocked)));
        assert_eq!(
            *notifier.toasts.borrow(),
            vec![(ToastKind::Error, SubmitError::PopupBlocked.to_string())]
        );
        assert_eq!(
            phases,
            vec![
                SubmitPhase::Validating,
                SubmitPhase::Submitting,
                SubmitPhase::Failed,
                SubmitPhase::Idle
            ]
        );
    }

    #[test]
    fn busy_only_while_sending_or_waiting_for_reset() {
        assert!(SubmitPhase::Submitting.is_busy());
        assert!(SubmitPhase::Succeeded.is_busy());
        assert!(!SubmitPhase::Idle.is_busy());
        assert!(!SubmitPhase::Failed.is_busy());
    }

    #[test]
    fn reset_waits_for_the_delay_then_clears_the_form() {
        let (tx, rx) = oneshot::channel::<()>();
        let phases = RefCell::new(Vec::new());
        let mut reset = Box::pin(reset_after(
            async {
                let _ = rx.await;
            },
            |p| phases.borrow_mut().push(p),
        ));

        assert!(reset.as_mut().now_or_never().is_none());
        assert!(phases.borrow().is_empty());

        tx.send(()).unwrap();
        let blank = block_on(reset);
        assert_eq!(blank, FormValues::default());
        assert_eq!(*phases.borrow(), vec![SubmitPhase::Idle]);
    }

    #[test]
    fn successful_cycle_ends_idle_with_an_empty_form() {
        let dispatcher = RecordingDispatcher::default();
        let notifier = RecordingNotifier::default();
        let mut phases = Vec::new();

        block_on(submit(&filled(), &dispatcher, &notifier, |p| phases.push(p))).unwrap();
        let blank = block_on(reset_after(async {}, |p| phases.push(p)));

        assert_eq!(
            phases,
            vec![
                SubmitPhase::Validating,
                SubmitPhase::Submitting,
                SubmitPhase::Succeeded,
                SubmitPhase::Idle
            ]
        );
        assert_eq!(blank, FormValues::default());
        assert!(!phases.last().unwrap().is_busy());
    }

    #[test]
    fn padded_values_reach_the_link_untouched() {
        let values = FormValues {
            name: " Ana María ".to_string(),
            phone: "3209876543 ".to_string(),
            message: "  ".to_string(),
            ..filled()
        };
        let dispatcher = RecordingDispatcher::default();
        let notifier = RecordingNotifier::default();

        let receipt = block_on(submit(&values, &dispatcher, &notifier, |_| {})).unwrap();

        let encoded = receipt.link.split_once("?text=").unwrap().1;
        let text = urlencoding::decode(encoded).unwrap();
        assert!(text.contains("👤 *Nombre:*  Ana María \n"));
        assert!(text.contains("📱 *Teléfono:* 3209876543 \n"));
        assert!(text.ends_with("💬 *Mensaje:*\n  "));
        assert!(!text.contains("Sin mensaje adicional"));
    }

    #[test]
    fn invalid_rejection_describes_the_count() {
        let errors = FormValues { name: "Lu".to_string(), ..filled() }
            .validate()
            .unwrap_err();
        assert_eq!(Rejected::Invalid(errors).to_string(), "1 campo(s) inválido(s)");
    }
}
