//! # contrast-core — WCAG 2.1 contrast evaluation
//!
//! A pure computation pipeline for judging text readability: given a
//! foreground and a background color, how strong is their luminance
//! contrast, and which WCAG conformance bars does it clear?
//!
//! # Architecture
//!
//! ```text
//! "#RRGGBB" strings
//!     │
//!     ▼
//! rgb.rs:         decode hex into 8-bit channel triples (the only
//!                 fallible stage — everything below is total)
//!     │
//!     ▼
//! luminance.rs:   linearize channels, weight-sum to relative
//!                 luminance per the WCAG 2.1 formula
//!     │
//!     ▼
//! contrast.rs:    (lighter + 0.05) / (darker + 0.05) — the ratio
//!     │
//!     ▼
//! conformance.rs: classify against AA/AAA × normal/large thresholds
//!     │
//!     ▼
//! report.rs:      bundle it all into one Evaluation for adapters
//! ```
//!
//! Every stage is a pure function of its inputs: no caching, no
//! ambient state, no I/O. Derived values are recomputed on every call.
//! The crate never rounds — presenting a ratio as "4.48" is the UI's
//! business; conformance verdicts always compare the full-precision
//! value.

pub mod conformance;
pub mod contrast;
pub mod luminance;
pub mod report;
pub mod rgb;

pub use conformance::{Conformance, Level};
pub use contrast::contrast_ratio;
pub use luminance::relative_luminance;
pub use report::{Evaluation, evaluate_hex};
pub use rgb::{ParseColorError, Rgb};
