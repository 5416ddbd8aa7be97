//! # fieldwork-core
//!
//! The form model underneath the fieldwork toolkit.
//!
//! This crate provides:
//! - Input elements with declarative (HTML5-style) constraints
//! - Constraint-validation state (`ValidityState`) and custom validity
//!   messages
//! - A three-way visual state per input (untouched / valid / invalid)
//! - Form elements with value extraction, reset and populate
//! - Datetime-local parsing and timestamp normalization helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldwork_core::{FormElement, Input};
//!
//! let mut form = FormElement::new("booking")
//!     .with(Input::text("title").required())
//!     .with(Input::datetime_local("start").required())
//!     .with(Input::datetime_local("end").required());
//!
//! form.input_mut("title").unwrap().value = "Standup".into();
//! assert!(!form.check_validity()); // start and end are still empty
//! ```
//!
//! Validation logic beyond the declarative tier lives in
//! `fieldwork-validate`; form lifecycle wiring lives in
//! `fieldwork-forms`.

mod constraints;
pub mod datetime;
mod form;
mod input;
mod validity;

pub use constraints::Constraints;
pub use form::{Document, FormElement};
pub use input::{Input, InputKind};
pub use validity::{ValidityState, VisualState};
