//! Page effects. Each module keeps its decision logic in plain Rust and its
//! DOM wiring in a `hydrate`-only `init(&Page)`.

pub mod active_section;
pub mod contact_form;
pub mod cursor;
pub mod mobile_nav;
pub mod particles;
pub mod perf_hints;
pub mod project_filter;
pub mod reveal;
pub mod scroll_progress;
pub mod smooth_scroll;
pub mod theme;
pub mod typing;
