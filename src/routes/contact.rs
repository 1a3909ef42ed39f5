use actix_web::http::header::ContentType;
use actix_web::web;
use actix_web::HttpResponse;
use serde::Deserialize;

use crate::domain::ContactDraft;
use crate::email_relay::RelayClient;
use crate::form::ContactForm;
use crate::form::SubmitOutcome;
use crate::notifications::FlashNotifier;
use crate::routes::page::render_page;
use crate::utils::see_other;

/// Raw contact form body, exactly as posted by the page.
#[derive(Deserialize)]
pub struct ContactFormData {
    name: String,
    email: String,
    message: String,
}

impl From<ContactFormData> for ContactDraft {
    fn from(value: ContactFormData) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

/// `POST /contact`
///
/// Runs one submit cycle of the contact form against the relay.
///
/// - validation rejected: re-render the page with inline errors and the
///   entered values preserved (400); no notification, no relay call
/// - settled (sent or failed): the notifier has queued the toast; redirect
///   back to the form so the toast renders exactly once on the next `GET /`
///
/// # Request example
///
/// ```sh
///     curl --data 'name=Ann&email=a%40b.co&message=hi' http://127.0.0.1:8000/contact
/// ```
#[tracing::instrument(
    name = "Handling contact form submission",
    skip(form, relay),
    fields(
        contact_name = %form.name,
        contact_email = %form.email,
    )
)]
pub async fn send_message(
    form: web::Form<ContactFormData>,
    relay: web::Data<RelayClient>,
) -> HttpResponse {
    let mut contact_form = ContactForm::with_draft(form.0.into());

    match contact_form.submit(relay.get_ref(), &FlashNotifier).await {
        SubmitOutcome::Rejected => HttpResponse::BadRequest()
            .content_type(ContentType::html())
            .body(render_page(contact_form.draft(), contact_form.errors(), "")),
        // a fresh controller per request can never be in flight; handled the
        // same as the settled outcomes
        SubmitOutcome::Sent | SubmitOutcome::Failed | SubmitOutcome::InFlight => {
            see_other("/#contact")
        }
    }
}
