//! Contact form: field validation, form state and submission to the email
//! relay.

pub mod form;
pub mod submit;
pub mod validate;

pub use form::{ContactForm, Field, FormStatus};
pub use submit::{send, Relay, RelayResponse, SubmitError};
