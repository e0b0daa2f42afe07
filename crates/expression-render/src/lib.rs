//! Canonical human-readable rendering of migration expressions.
//!
//! Every place the console displays a mapping or filter expression
//! goes through this crate: one tree walk, parameterized by
//! [`RenderOptions`] for the small deliberate presentational
//! differences between call sites (fallback text, quoting style,
//! lookup prefix). Rendering is pure and total — malformed input
//! degrades to placeholder text, it never fails.

pub mod lookup;
pub mod options;
pub mod render;
pub mod tokens;

pub use lookup::{LookupParts, classify_lookup};
pub use options::{BooleanStyle, LookupStyle, RenderOptions, StringStyle};
pub use render::{Render, Renderer, render, render_filter};
pub use tokens::{Token, TokenKind, boolean_tokens};
