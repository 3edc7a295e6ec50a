mod capture;
pub mod workspace;

pub use capture::{CapturedEvent, captured_events, init_test_tracing};
pub use workspace::{RunDir, Workspace};
