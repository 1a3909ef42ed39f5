use std::collections::BTreeMap;

use super::ContactDraft;
use super::Field;

/// The outcome of validating a `ContactDraft`: a mapping from field to a
/// human-readable error message, with an entry only for the fields that are
/// currently failing. An empty mapping means the draft is valid.
///
/// A result is always produced from scratch by `validate`; stale entries from
/// a previous attempt are replaced wholesale, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult(BTreeMap<Field, String>);

impl ValidationResult {
    pub fn is_valid(&self) -> bool { self.0.is_empty() }

    pub fn get(
        &self,
        field: Field,
    ) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(
        &mut self,
        field: Field,
        message: impl Into<String>,
    ) {
        self.0.insert(field, message.into());
    }

    /// Drop a single field's entry, leaving the others untouched. Used when
    /// the user edits a field after a rejected submit.
    pub fn remove(
        &mut self,
        field: Field,
    ) {
        self.0.remove(&field);
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Validate a draft. Pure; no side effects.
///
/// Rules:
/// - `name` must be non-empty after trimming whitespace
/// - `email` must be non-empty and look like an email (see `looks_like_email`)
/// - `message` must be non-empty
///
/// Fields that pass are omitted from the result entirely; they are never
/// present with an empty message.
pub fn validate(draft: &ContactDraft) -> ValidationResult {
    let mut errors = ValidationResult::default();
    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }
    if draft.email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !looks_like_email(&draft.email) {
        errors.insert(Field::Email, "Email is invalid");
    }
    if draft.message.is_empty() {
        errors.insert(Field::Message, "Message is required");
    }
    errors
}

/// Deliberately permissive email check: the input must contain a
/// `local@host.tld` shaped run of non-whitespace, i.e. the search-style regex
/// `\S+@\S+\.\S+`. Full RFC validation is out of scope; the relay is the
/// final arbiter of deliverability.
fn looks_like_email(input: &str) -> bool {
    // every `@` in a token is a candidate split point, and every dot after
    // it a candidate host/tld boundary; stopping at the first of either
    // would wrongly reject inputs like `a@.b.c`
    input.split_whitespace().any(|token| {
        token
            .char_indices()
            .filter(|&(_, c)| c == '@')
            .any(|(at, _)| {
                if at == 0 {
                    return false;
                }
                let domain = &token[at + 1..];
                domain
                    .char_indices()
                    .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
            })
    })
}
