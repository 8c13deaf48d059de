// 尺寸计算：纯函数，便于单测
// 越界的更新直接丢弃（保留原值），不夹紧到边界

use crate::geometry::Size;
use crate::resizer::bounds::Bounds;

// None 表示保留当前值
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResizeUpdate {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ResizeUpdate {
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

// 锁定比例时由宽度推出高度：ratio > 1 用乘法，否则用除法（沿用既有行为）
pub fn locked_height(width: f64, ratio: f64) -> f64 {
    if ratio > 1.0 {
        width * ratio
    } else {
        width / ratio
    }
}

pub fn resize_candidate(
    captured: Size,
    aspect_ratio: Option<f64>,
    dx: f64,
    dy: f64,
    bounds: &Bounds,
) -> ResizeUpdate {
    match aspect_ratio {
        Some(ratio) => {
            let width = captured.width + dx;
            let height = locked_height(width, ratio);
            if bounds.admits_width(width) && bounds.admits_height(height) {
                ResizeUpdate {
                    width: Some(width),
                    height: Some(height),
                }
            } else {
                ResizeUpdate::default()
            }
        }
        None => {
            let width = captured.width + dx;
            let height = captured.height + dy;
            ResizeUpdate {
                width: bounds.admits_width(width).then_some(width),
                height: bounds.admits_height(height).then_some(height),
            }
        }
    }
}
