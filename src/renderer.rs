// renderer: 使用 tiny-skia 在 CPU 上绘制页面（容器、子内容、手柄）并输出到 softbuffer
// 手柄颜色按样式类名查表，对应外部样式表

use anyhow::{anyhow, Result};
use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::geometry::Rect;
use crate::page::{Content, Page};
use crate::resizer::handles::classes;

fn page_background() -> Color {
    Color::from_rgba8(245, 245, 245, 255)
}

fn class_color(class: &str) -> Option<Color> {
    match class {
        classes::DRAG => Some(Color::from_rgba8(96, 125, 139, 255)),
        classes::RESIZER_RIGHT | classes::RESIZER_BOTTOM => Some(Color::from_rgba8(61, 165, 244, 255)),
        classes::ANGLE_TOP_RIGHT => Some(Color::from_rgba8(220, 20, 60, 255)),
        _ => None,
    }
}

fn to_skia(r: Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(r.left as f32, r.top as f32, r.width as f32, r.height as f32)
}

fn fill(pixmap: &mut Pixmap, r: Rect, color: Color) {
    if let Some(rect) = to_skia(r) {
        let mut paint = Paint::default();
        paint.set_color(color);
        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }
}

// 演示页面的子内容：纯色面板
pub struct Panel {
    pub color: Color,
    pub padding: f64,
}

impl Content for Panel {
    fn paint(&self, pixmap: &mut Pixmap, area: Rect) {
        let inner = Rect::new(
            area.left + self.padding,
            area.top + self.padding,
            (area.width - self.padding * 2.0).max(0.0),
            (area.height - self.padding * 2.0).max(0.0),
        );
        fill(pixmap, inner, self.color);
    }
}

pub struct Renderer {
    pub pixmap: Pixmap,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| anyhow!("create pixmap failed"))?;
        Ok(Self { pixmap })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if self.pixmap.width() != width || self.pixmap.height() != height {
            self.pixmap =
                Pixmap::new(width, height).ok_or_else(|| anyhow!("resize pixmap failed"))?;
        }
        Ok(())
    }

    pub fn paint_page(&mut self, page: &Page) -> Result<()> {
        self.pixmap.fill(page_background());
        for (widget, content) in page.widgets() {
            let rect = widget.rect();
            fill(&mut self.pixmap, rect, Color::WHITE);
            content.paint(&mut self.pixmap, rect);

            // 容器边框
            if let Some(r) = to_skia(rect) {
                let path = PathBuilder::from_rect(r);
                let mut paint = Paint::default();
                paint.set_color(Color::from_rgba8(34, 34, 34, 255));
                let stroke = Stroke {
                    width: 1.0,
                    ..Stroke::default()
                };
                self.pixmap
                    .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }

            for region in widget.handles() {
                let color = region
                    .handle
                    .class_names()
                    .iter()
                    .rev()
                    .find_map(|c| class_color(c))
                    .ok_or_else(|| anyhow!("no style for handle {:?}", region.handle))?;
                // 未启用的拖动条淡化显示
                let color = if region.wired {
                    color
                } else {
                    Color::from_rgba(color.red(), color.green(), color.blue(), 0.25)
                        .unwrap_or(color)
                };
                fill(&mut self.pixmap, region.rect, color);
            }
        }
        Ok(())
    }

    pub fn as_u32_slice(&self) -> &[u32] {
        bytemuck::cast_slice(self.pixmap.data())
    }

    pub fn as_bgra_u32(&self) -> Vec<u32> {
        // softbuffer 需要 0RGB（小端即 BGRA），tiny-skia 为预乘 RGBA，只调换 R 与 B
        if std::env::var("RESIZER_ASSUME_BGRA").is_ok() {
            return self.as_u32_slice().to_vec();
        }
        self.pixmap
            .data()
            .chunks_exact(4)
            .map(|px| u32::from_le_bytes([px[2], px[1], px[0], px[3]]))
            .collect()
    }
}
