// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # wordcase
//!
//! Turn programmatic identifiers into human-readable labels and back.
//!
//! ## Quick Start
//!
//! ```rust
//! use wordcase::{split_identifier_to_words, split_identifier_to_words_as, WordCase};
//!
//! // Enum variant name to UI label
//! assert_eq!(split_identifier_to_words("HTTPServerError"), "HTTP Server Error");
//! assert_eq!(
//!     split_identifier_to_words_as("PaymentDeclined", WordCase::Sentence),
//!     "Payment declined"
//! );
//!
//! // Label back to an identifier
//! assert_eq!(wordcase::to_pascal_case("payment declined"), "PaymentDeclined");
//! assert_eq!(wordcase::to_camel_case("payment declined"), "paymentDeclined");
//! ```
//!
//! ## Operations
//!
//! | Function | `"myHTTPValue2"` / `"  two   WORDS "` |
//! |----------|----------------------------------------|
//! | [`split_identifier_to_words`] | `my HTTP Value 2` |
//! | [`split_identifier_to_words_as`] (`AllLower`) | `my http value 2` |
//! | [`to_title_case`] | `  Two   Words ` |
//! | [`to_sentence_case`] | `Two   words ` |
//! | [`collapse_whitespace`] | `two WORDS` |
//! | [`to_camel_case`] | `twoWords` |
//! | [`to_pascal_case`] | `TwoWords` |
//!
//! The free functions use [`Locale::Invariant`]. Use [`CaseTransformer`] to
//! pick the case mapping explicitly, or [`CaseExt`] for method syntax.
//!
//! Every function is total over `&str`. Fallible entry points
//! ([`CaseTransformer::try_apply`], [`CaseTransformer::try_apply_bytes`])
//! report [`TransformError`] for absent input or bytes that are not UTF-8.

pub mod case;
pub mod error;
pub mod locale;
pub mod split;
pub mod transform;
pub mod whitespace;

#[cfg(feature = "templates")]
pub mod filters;

// Re-exports
pub use case::{
    split_identifier_to_words_as, to_camel_case, to_pascal_case, to_sentence_case, to_title_case,
    WordCase,
};
pub use error::{Result, TransformError};
pub use locale::Locale;
pub use split::{boundaries, split_identifier_to_words, Boundary, CharClass};
pub use transform::{CaseExt, CaseTransformer, Operation};
pub use whitespace::collapse_whitespace;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
