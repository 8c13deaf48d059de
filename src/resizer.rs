pub mod bounds;
pub mod handles;
pub mod options;
pub mod resize;
pub mod state;

pub use bounds::Bounds;
pub use handles::{hit_test_handle, layout_handles, Handle, HandleMetrics, HandleRegion, Side};
pub use options::ResizerOptions;
pub use state::{Interaction, Resizer};
