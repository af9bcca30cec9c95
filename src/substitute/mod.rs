//! Image directive substitution.
//!
//! Generated articles mark image slots with inline directives such as
//! `{{GENERATE_IMAGE: a cup of tea | 一杯茶}}`. This module finds them
//! ([`directive`]) and replaces each with an embedded image or a visible
//! failure marker ([`substitute_directives`]).

pub mod directive;
mod pass;

pub use directive::{Directive, DirectiveKind, RejectReason, Rejected, ScanResult, scan};
pub use pass::{ImageSettings, Substitution, styled_prompt, substitute_directives};
