// 可缩放、可选拖动的容器控件
// 核心逻辑不依赖窗口系统；renderer / window_manager 负责把页面画到 winit 窗口

pub mod config;
pub mod container;
pub mod document;
pub mod error;
pub mod geometry;
pub mod page;
pub mod renderer;
pub mod resizer;
pub mod window_manager;

pub use error::ResizerError;
pub use geometry::{Point, Rect, Size};
pub use page::Page;
pub use resizer::{Bounds, Handle, Resizer, ResizerOptions, Side};
