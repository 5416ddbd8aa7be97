//! # fieldwork-forms
//!
//! Form lifecycle wiring on top of `fieldwork-core` and
//! `fieldwork-validate`.
//!
//! This crate provides:
//! - [`FormInstance`], the per-form lifecycle manager: binding,
//!   real-time required-field sweeps, submission, reset, populate and
//!   destroy
//! - Per-form declarative configuration ([`FormConfig`]) and explicit
//!   caller-supplied hooks ([`FormHooks`])
//! - Datetime-picker handles owned by the instance and released on
//!   destroy
//! - The collaborator contracts for submission ([`Transport`]),
//!   notification ([`Notifier`]) and record loading ([`DataSource`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use fieldwork_core::{Document, FormElement, Input};
//! use fieldwork_forms::{FormHooks, FormInstance, LogNotifier, Transport};
//! use fieldwork_validate::{RuleSet, ValidatorRegistry};
//!
//! # fn transport() -> Arc<dyn Transport> { unimplemented!() }
//! let mut document = Document::new();
//! document.add_form(
//!     FormElement::new("booking")
//!         .config_attr(r#"{"action": "/api/bookings", "showToast": true}"#)
//!         .with(Input::text("title").required())
//!         .with(Input::datetime_local("start").required())
//!         .with(Input::datetime_local("end").required()),
//! );
//!
//! let instance = FormInstance::bind(
//!     &mut document,
//!     "booking",
//!     RuleSet::new(),
//!     FormHooks::new(),
//!     Arc::new(ValidatorRegistry::with_builtins()),
//!     transport(),
//!     Arc::new(LogNotifier),
//! );
//! ```

mod config;
mod data;
mod error;
mod instance;
mod notify;
mod picker;
mod transport;

pub use config::{DateTimeHook, ErrorHook, FormConfig, FormHooks, SuccessHook};
pub use data::{load_records, DataSource};
pub use error::{FormsError, Result};
pub use instance::{FormInstance, Lifecycle};
pub use notify::{LogNotifier, Notifier, Severity, DEFAULT_TOAST_DURATION};
pub use picker::PickerHandle;
pub use transport::{normalize_response, BoxFuture, Transport};
