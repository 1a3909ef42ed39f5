mod draft;
mod validation;

// allow external `use` statements to skip `draft` etc
pub use draft::ContactDraft;
pub use draft::Field;
pub use validation::validate;
pub use validation::ValidationResult;
