//! Report rendering.
//!
//! Both renderers build the whole report as a `String` before anything is
//! printed, so a fatal condition (a zero baseline, a run without a CLI log)
//! produces an error instead of a half-written report.

mod compare;
mod console;
mod error;
mod markdown;

pub use compare::{count_delta, percent_change, success_rate};
pub use console::render_console;
pub use error::ReportError;
pub use markdown::render_markdown;
