//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready data computed from state
//! - [`renderer`]: Rendering entry point
//! - [`components`]: Screen region renderers
//! - [`helpers`]: Highlighting, badges and text layout
//! - [`theme`]: Color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    AdminEntry, AdminInfo, DetailInfo, DisplayItem, EmptyState, FilterBarInfo, FilterChip,
    FooterInfo, HeaderInfo, SearchBarInfo, ToastInfo, UIViewModel,
};
