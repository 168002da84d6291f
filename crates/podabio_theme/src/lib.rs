//! PodaBio Theme Engine
//!
//! Resolves a page's stored design tokens into CSS for inline embedding in the
//! public page template.
//!
//! # Overview
//!
//! A page's look comes from three layers, checked in order:
//!
//! 1. **Page overrides**: token groups stored on the page record
//! 2. **Theme tokens**: token groups of the theme the page references
//! 3. **Defaults**: compiled-in [`DefaultTokens`]
//!
//! Each layer holds four token groups (`shape_tokens`, `color_tokens`,
//! `typography_tokens`, `widget_styles`). A category present in a higher layer
//! shadows the whole category below it.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use podabio_theme::{ThemeEngine, PageRecord, ThemeRecord};
//!
//! let engine = ThemeEngine::default();
//! let css = engine.style_block(&page, Some(&theme));
//! // <style>{css}</style>
//! ```
//!
//! # Pipeline
//!
//! - [`TokenResolver`] merges the layers into a [`ResolvedStyle`]
//! - [`ResolvedStyle::values`] maps symbolic tokens through the [`mapper`]
//!   into concrete [`StyleValues`]
//! - [`CssGenerator`] emits custom properties and rule blocks
//!
//! Malformed or missing token data never fails a render; it falls through to
//! the next layer.

pub mod cache;
pub mod config;
pub mod defaults;
pub mod engine;
pub mod error;
pub mod generator;
pub mod mapper;
pub mod presets;
pub mod record;
pub mod resolver;
pub mod tokens;
pub mod values;

// Re-export commonly used types
pub use cache::{StyleCache, StyleKey};
pub use config::StyleConfig;
pub use defaults::DefaultTokens;
pub use engine::ThemeEngine;
pub use error::TokenParseError;
pub use generator::CssGenerator;
pub use presets::{preset_theme, ThemePreset};
pub use record::{PageRecord, ThemeRecord, TokenColumns};
pub use resolver::{ResolvedGroup, ResolvedStyle, ResolvedToken, TokenResolver, TokenSource};
pub use tokens::*;
pub use values::StyleValues;
