//! # fieldwork-validate
//!
//! The validation core of the fieldwork toolkit.
//!
//! This crate provides:
//! - A validator registry mapping names to validator functions,
//!   pre-seeded with the built-in cross-field rules
//! - Per-field validator configuration (bare names or names with options)
//! - A per-field runner layering custom validators on top of the
//!   declarative constraint tier
//! - A whole-form orchestrator aggregating per-field results
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldwork_core::{FormElement, Input};
//! use fieldwork_validate::{validate_all, RuleSet, ValidatorRegistry, ValidatorSpec};
//!
//! let registry = ValidatorRegistry::with_builtins();
//! let rules = RuleSet::new().rule(
//!     "end",
//!     vec![ValidatorSpec::configured("dateRange")
//!         .option("startField", "start")
//!         .option("endField", "end")],
//! );
//!
//! let mut form = FormElement::new("booking")
//!     .with(Input::datetime_local("start").value("2025-01-01T10:00"))
//!     .with(Input::datetime_local("end").value("2025-01-01T09:00"));
//!
//! assert!(!validate_all(&mut form, &rules, &registry));
//! ```
//!
//! The runner short-circuits within one field's validator list; the
//! orchestrator never short-circuits across fields. Both halves of that
//! asymmetry are deliberate.

mod builtin;
mod orchestrator;
mod registry;
mod rules;
mod runner;

pub use orchestrator::validate_all;
pub use registry::{ValidatorFn, ValidatorRegistry, Verdict};
pub use rules::{RuleSet, ValidatorOptions, ValidatorSpec};
pub use runner::run_field;
