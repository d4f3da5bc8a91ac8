//! Legacy system adapters.

mod mock_mainframe;

pub use mock_mainframe::MockMainframe;
