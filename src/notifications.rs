use actix_web_flash_messages::FlashMessage;

/// Page-lifetime notification host. One implementation is injected where a
/// submission settles, instead of binding the form to a concrete toast
/// mechanism; tests substitute a recording implementation.
///
/// Exactly one notification fires per settled submit cycle.
pub trait Notifier {
    fn notify_success(
        &self,
        text: &str,
    );
    fn notify_failure(
        &self,
        text: &str,
    );
}

/// Production notifier: posts a one-shot flash message, carried in a signed
/// cookie and consumed by the next page render. Requires the
/// `FlashMessagesFramework` middleware mounted on the `App`.
pub struct FlashNotifier;

impl Notifier for FlashNotifier {
    fn notify_success(
        &self,
        text: &str,
    ) {
        FlashMessage::info(text).send();
    }

    fn notify_failure(
        &self,
        text: &str,
    ) {
        FlashMessage::error(text).send();
    }
}
