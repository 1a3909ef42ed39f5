use std::fmt::Display;

/// The in-memory contents of the contact form. All three fields always exist;
/// an untouched field is an empty string, never absent.
///
/// No constraints are enforced here; raw text is accepted as-is, and
/// `validation::validate` decides what is acceptable at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// The state of the form on mount: three empty fields.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
        }
    }

    /// Replace the named field's value, preserving the other two.
    pub fn set(
        &mut self,
        field: Field,
        value: String,
    ) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(
        &self,
        field: Field,
    ) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

impl Default for ContactDraft {
    fn default() -> Self { Self::empty() }
}

/// Identifies one of the three form fields. Used as the key of
/// `ValidationResult` and as the target of `ContactForm::update_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// The `name` attribute of the corresponding form input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl Display for Field {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
