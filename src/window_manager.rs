// 窗口与 softbuffer 初始化模块
// 负责创建 winit 窗口并建立 softbuffer Surface，供渲染器写入像素

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use softbuffer::{Context, Surface};
use winit::{
    dpi::LogicalSize,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes},
};

pub struct WindowState {
    pub window: &'static Window,
    pub surface: Surface<&'static Window, &'static Window>,
    _context: Context<&'static Window>,
}

impl WindowState {
    pub fn new(active: &ActiveEventLoop, title: &str, width: u32, height: u32) -> Result<Self> {
        let attrs = WindowAttributes::default()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width as f64, height as f64));
        let window = active.create_window(attrs)?;
        let window: &'static Window = Box::leak(Box::new(window));
        let context = Context::new(window).map_err(|e| anyhow!("context create failed: {e}"))?;
        let surface =
            Surface::new(&context, window).map_err(|e| anyhow!("surface create failed: {e}"))?;
        let mut state = Self {
            window,
            surface,
            _context: context,
        };
        // softbuffer 要先 resize 再获取缓冲
        state.fit_surface()?;
        Ok(state)
    }

    // 按窗口内部尺寸调整 surface，返回该尺寸
    pub fn fit_surface(&mut self) -> Result<(u32, u32)> {
        let size = self.window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));
        let w = NonZeroU32::new(width).ok_or_else(|| anyhow!("zero surface width"))?;
        let h = NonZeroU32::new(height).ok_or_else(|| anyhow!("zero surface height"))?;
        self.surface
            .resize(w, h)
            .map_err(|e| anyhow!("surface resize failed: {e}"))?;
        Ok((width, height))
    }

    pub fn present(&mut self, pixels: &[u32]) -> Result<()> {
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("surface buffer failed: {e}"))?;
        let n = buffer.len().min(pixels.len());
        buffer[..n].copy_from_slice(&pixels[..n]);
        buffer
            .present()
            .map_err(|e| anyhow!("surface present failed: {e}"))
    }
}
