use crate::domain::validate;
use crate::domain::ContactDraft;
use crate::domain::Field;
use crate::domain::ValidationResult;
use crate::email_relay::RelayClient;
use crate::email_relay::RelayError;
use crate::notifications::Notifier;

/// How a submit attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A previous submission is still awaiting the relay; nothing was done.
    InFlight,
    /// Validation failed; the errors are stored on the form and no relay
    /// request was issued.
    Rejected,
    /// The relay accepted the message; the draft has been reset.
    Sent,
    /// The relay call failed; the draft is untouched so the user may retry.
    Failed,
}

/// The contact form controller: owns the draft, the per-field validation
/// errors of the last submit attempt, and the in-flight flag.
///
/// One instance per mounted form; nothing is shared across instances and
/// nothing survives the instance (no storage).
pub struct ContactForm {
    draft: ContactDraft,
    errors: ValidationResult,
    sending: bool,
}

impl ContactForm {
    /// A freshly mounted form: empty draft, no errors, idle.
    pub fn new() -> Self { Self::with_draft(ContactDraft::empty()) }

    /// A form pre-filled with user input, e.g. from a submitted request body.
    pub fn with_draft(draft: ContactDraft) -> Self {
        Self {
            draft,
            errors: ValidationResult::default(),
            sending: false,
        }
    }

    pub fn draft(&self) -> &ContactDraft { &self.draft }

    /// Errors from the most recent submit attempt. Not recomputed on edits;
    /// see `update_field` for the one exception.
    pub fn errors(&self) -> &ValidationResult { &self.errors }

    /// True from the moment a submit is accepted until the relay call
    /// settles. The render layer uses this to disable the submit control.
    pub fn is_sending(&self) -> bool { self.sending }

    /// Replace one field's value, preserving the others. Accepts raw text;
    /// cannot fail. Also drops that field's own stale error, so an inline
    /// message disappears as soon as the user starts correcting the field;
    /// the other fields' errors stay until the next submit recomputes them.
    pub fn update_field(
        &mut self,
        field: Field,
        value: String,
    ) {
        self.draft.set(field, value);
        self.errors.remove(field);
    }

    /// Run one submit cycle: validate, and only if the draft is clean,
    /// dispatch it to the relay.
    ///
    /// A non-empty validation result aborts the send; nothing reaches the
    /// relay until every field passes.
    ///
    /// The in-flight flag is cleared after the relay call settles no matter
    /// the outcome. On success the draft is reset to empty; on failure it is
    /// left exactly as the user typed it. Either way the notifier fires
    /// exactly once. A send, once issued, cannot be aborted.
    #[tracing::instrument(name = "Submitting contact form", skip_all)]
    pub async fn submit(
        &mut self,
        relay: &RelayClient,
        notifier: &impl Notifier,
    ) -> SubmitOutcome {
        if let Some(outcome) = self.begin_submit() {
            return outcome;
        }
        let result = relay.send_message(&self.draft).await;
        self.settle_submit(result, notifier)
    }

    /// Accept or reject a submit attempt. Returns `Some` if the attempt ends
    /// here (already in flight, or validation failed); returns `None` after
    /// raising the in-flight flag, in which case the caller must dispatch to
    /// the relay and pass the result to `settle_submit`.
    fn begin_submit(&mut self) -> Option<SubmitOutcome> {
        // the submit control is disabled while sending, but nothing stops
        // re-entrant submits from other triggers; ignore them here
        if self.sending {
            return Some(SubmitOutcome::InFlight);
        }

        // recomputed fully on every attempt; stale errors are replaced, not
        // merged
        self.errors = validate(&self.draft);
        if !self.errors.is_valid() {
            return Some(SubmitOutcome::Rejected);
        }

        self.sending = true;
        None
    }

    /// Apply a settled relay call. The in-flight flag is cleared first, no
    /// matter the outcome.
    fn settle_submit(
        &mut self,
        result: Result<(), RelayError>,
        notifier: &impl Notifier,
    ) -> SubmitOutcome {
        // must never remain `sending` after settlement
        self.sending = false;

        match result {
            Ok(()) => {
                self.draft = ContactDraft::empty();
                notifier.notify_success("Message sent successfully");
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "contact message could not be delivered"
                );
                notifier.notify_failure("Failed to send message. Please try again");
                SubmitOutcome::Failed
            }
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self { Self::new() }
}
