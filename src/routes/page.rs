use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use actix_web_flash_messages::IncomingFlashMessages;
use actix_web_flash_messages::Level;

use crate::domain::ContactDraft;
use crate::domain::Field;
use crate::domain::ValidationResult;

const STYLE: &str = r#"
    body { margin: 0; background: #000; color: #e5e7eb; font-family: sans-serif; letter-spacing: -0.02em; }
    section { max-width: 48rem; margin: 0 auto; padding: 2rem 1rem; }
    h1, h2 { text-align: center; font-weight: 600; }
    .cards { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
    .card { border: 1px solid #1f2937; border-radius: 0.5rem; padding: 1rem; flex: 1 1 14rem; }
    input, textarea { width: 100%; box-sizing: border-box; margin-bottom: 0.5rem; padding: 0.5rem 0.75rem;
      border: 1px solid #1f2937; border-radius: 0.5rem; background: transparent; color: inherit; }
    button { width: 100%; padding: 0.5rem 1rem; border: none; border-radius: 0.25rem;
      background: #facc15; color: #0f172a; font-weight: 600; cursor: pointer; }
    button:disabled { opacity: 0.5; cursor: not-allowed; }
    .field-error { margin: 0 0 1rem; font-size: 0.875rem; color: #be185d; }
    .toast { padding: 0.5rem 1rem; border-radius: 0.25rem; text-align: center; }
    .toast-success { background: #14532d; }
    .toast-error { background: #7f1d1d; }
"#;

// the only client-side logic on the page: while a submission is awaiting the
// relay, the submit control is disabled and relabelled
const SCRIPT: &str = r#"
    document.getElementById("contact-form").addEventListener("submit", () => {
      const button = document.getElementById("send-button");
      button.disabled = true;
      button.textContent = "Sending...";
    });
"#;

/// Inline error slot beneath a field: rendered only when that field is
/// present in the current validation result.
fn error_slot(
    errors: &ValidationResult,
    field: Field,
) -> String {
    match errors.get(field) {
        Some(msg) => format!(r#"<p class="field-error" aria-live="polite">{msg}</p>"#),
        None => String::new(),
    }
}

/// Assemble the whole single page: static sections (no logic, no events)
/// followed by the contact form. Draft values are re-rendered into the form,
/// escaped; `toasts` is pre-rendered markup for the notification region.
pub(crate) fn render_page(
    draft: &ContactDraft,
    errors: &ValidationResult,
    toasts: &str,
) -> String {
    let name_value = htmlescape::encode_attribute(&draft.name);
    let email_value = htmlescape::encode_attribute(&draft.email);
    let message_value = htmlescape::encode_minimal(&draft.message);
    let name_error = error_slot(errors, Field::Name);
    let email_error = error_slot(errors, Field::Email);
    let message_error = error_slot(errors, Field::Message);
    let style = STYLE;
    let script = SCRIPT;

    // `r##`: the anchor hrefs contain `"#`, which would close a plain `r#`
    // raw string
    format!(
        r##"<!doctype html>
<html lang="en">
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Portfolio</title>
    <style>{style}</style>
  </head>
  <body>
    <nav>
      <section>
        <a href="#about">About</a> &middot;
        <a href="#projects">Projects</a> &middot;
        <a href="#skills">Skills</a> &middot;
        <a href="#contact">Contact</a>
      </section>
    </nav>

    <section id="hero">
      <h1>Hi, I build things for the web</h1>
      <p>Full-stack developer with a soft spot for small, fast, reliable software.</p>
    </section>

    <section id="about">
      <h2>About</h2>
      <p>
        I enjoy taking a product from a sketch on paper to something people
        actually use. Most of my days are spent between backend services and
        the occasional frontend polish pass.
      </p>
    </section>

    <section id="projects">
      <h2>Projects</h2>
      <div class="cards">
        <div class="card">
          <h3>Newsletter engine</h3>
          <p>Subscription service with confirmed opt-in and scheduled delivery.</p>
        </div>
        <div class="card">
          <h3>Link shortener</h3>
          <p>Tiny URL service with per-link statistics.</p>
        </div>
        <div class="card">
          <h3>Recipe box</h3>
          <p>Searchable personal recipe collection with tagging.</p>
        </div>
      </div>
    </section>

    <section id="skills">
      <h2>Skills</h2>
      <div class="cards">
        <div class="card">Rust</div>
        <div class="card">TypeScript</div>
        <div class="card">PostgreSQL</div>
        <div class="card">HTML &amp; CSS</div>
      </div>
    </section>

    <section id="contact">
      <div id="toasts">
{toasts}      </div>
      <h2>Lets Connect</h2>
      <form id="contact-form" action="/contact" method="post">
        <input type="text" id="name" name="name" placeholder="Name" value="{name_value}" />
        {name_error}
        <input type="email" id="email" name="email" placeholder="Email" value="{email_value}" />
        {email_error}
        <textarea id="message" name="message" placeholder="Message" rows="4">{message_value}</textarea>
        {message_error}
        <button type="submit" id="send-button">Send</button>
      </form>
    </section>

    <script>{script}</script>
  </body>
</html>
"##
    )
}

/// `GET /`
///
/// The page shell: mounts the static sections in sequence, ending with the
/// contact form. Incoming flash messages (the transient notifications posted
/// by a settled submission) are rendered once into the toast region and are
/// gone on the next request.
pub async fn home(flash_messages: IncomingFlashMessages) -> HttpResponse {
    let mut toasts = String::new();
    for msg in flash_messages.iter() {
        let class = match msg.level() {
            Level::Error => "toast toast-error",
            _ => "toast toast-success",
        };
        toasts.push_str(&format!(
            "        <p class=\"{class}\">{}</p>\n",
            msg.content()
        ));
    }

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page(
            &ContactDraft::empty(),
            &ValidationResult::default(),
            &toasts,
        ))
}
