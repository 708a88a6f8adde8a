//! Stub loading and rendering

pub mod loader;
pub mod renderer;
pub mod stubs;

pub use loader::{StubLoader, StubSource, PUBLISHED_STUB_DIR};
pub use renderer::{PlaceholderMap, StubRenderer};
pub use stubs::Stub;
