//! Design tokens for page styling
//!
//! Tokens are the symbolic settings a theme stores:
//! - Token groups (category → flat value or variant map)
//! - Shape (corners, border widths, spacing density)
//! - Widget effects (borders, glow, shadow)
//! - Typography scale
//! - Colors

mod color;
mod group;
mod shape;
mod typography;
mod widget;

pub use color::*;
pub use group::*;
pub use shape::*;
pub use typography::*;
pub use widget::*;
