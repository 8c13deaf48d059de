use std::fmt;
use std::str::FromStr;

use crate::error::ResizerError;
use crate::geometry::{Point, Rect};
use crate::resizer::options::ResizerOptions;

// 外部样式表提供的类名
pub mod classes {
    pub const CONTAINER: &str = "resizeable-element";
    pub const DRAG: &str = "drag";
    pub const RESIZER: &str = "resizer";
    pub const RESIZER_RIGHT: &str = "resizer-right";
    pub const RESIZER_BOTTOM: &str = "resizer-bottom";
    pub const ANGLE_TOP_RIGHT: &str = "angle-top-right";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Right,
    Bottom,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Right => "right",
            Side::Bottom => "bottom",
        }
    }
}

impl FromStr for Side {
    type Err = ResizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "right" => Ok(Side::Right),
            "bottom" => Ok(Side::Bottom),
            _ => Err(ResizerError::UnknownSide(s.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    Drag,
    Edge(Side),
    Corner,
}

impl Handle {
    pub fn class_names(self) -> &'static [&'static str] {
        match self {
            Handle::Drag => &[classes::DRAG],
            Handle::Edge(Side::Right) => &[classes::RESIZER, classes::RESIZER_RIGHT],
            Handle::Edge(Side::Bottom) => &[classes::RESIZER, classes::RESIZER_BOTTOM],
            Handle::Corner => &[classes::RESIZER, classes::ANGLE_TOP_RIGHT],
        }
    }

    pub fn keeps_aspect_ratio(self) -> bool {
        matches!(self, Handle::Corner)
    }

    pub fn is_resize(self) -> bool {
        !matches!(self, Handle::Drag)
    }
}

// 手柄尺寸（CSS 像素）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleMetrics {
    pub drag_height: f64,
    pub edge_thickness: f64,
    pub corner_size: f64,
}

impl Default for HandleMetrics {
    fn default() -> Self {
        Self {
            drag_height: 12.0,
            edge_thickness: 6.0,
            corner_size: 12.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleRegion {
    pub handle: Handle,
    pub rect: Rect,
    // 未开启 draggable 时拖动条仍然布局，但不响应按下
    pub wired: bool,
}

fn edge_region(side: Side, r: Rect, m: &HandleMetrics) -> HandleRegion {
    let rect = match side {
        Side::Right => Rect::new(r.right() - m.edge_thickness, r.top, m.edge_thickness, r.height),
        Side::Bottom => Rect::new(r.left, r.bottom() - m.edge_thickness, r.width, m.edge_thickness),
    };
    HandleRegion {
        handle: Handle::Edge(side),
        rect,
        wired: true,
    }
}

// 按绘制顺序返回
pub fn layout_handles(r: Rect, options: &ResizerOptions, m: &HandleMetrics) -> Vec<HandleRegion> {
    let mut regions = Vec::with_capacity(4);
    regions.push(HandleRegion {
        handle: Handle::Drag,
        rect: Rect::new(r.left, r.top, r.width, m.drag_height.min(r.height.max(0.0))),
        wired: options.draggable,
    });
    for side in options.edges() {
        regions.push(edge_region(side, r, m));
    }
    regions.push(HandleRegion {
        handle: Handle::Corner,
        rect: Rect::new(r.right() - m.corner_size, r.top, m.corner_size, m.corner_size),
        wired: true,
    });
    regions
}

pub fn hit_test_handle(p: Point, regions: &[HandleRegion]) -> Option<HandleRegion> {
    regions.iter().rev().find(|region| region.rect.contains(p)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 100.0)
    }

    #[test]
    fn unknown_side_reports_the_value() {
        let err = "diagonal".parse::<Side>().unwrap_err();
        assert!(matches!(err, ResizerError::UnknownSide(ref s) if s == "diagonal"));
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn known_sides_parse() {
        assert_eq!("right".parse::<Side>().unwrap(), Side::Right);
        assert_eq!(" bottom ".parse::<Side>().unwrap(), Side::Bottom);
        assert_eq!(Side::Bottom.to_string(), "bottom");
    }

    #[test]
    fn handle_classes() {
        assert_eq!(Handle::Drag.class_names(), &["drag"]);
        assert_eq!(
            Handle::Edge(Side::Right).class_names(),
            &["resizer", "resizer-right"]
        );
        assert_eq!(Handle::Corner.class_names(), &["resizer", "angle-top-right"]);
        assert!(Handle::Corner.keeps_aspect_ratio());
        assert!(!Handle::Edge(Side::Bottom).keeps_aspect_ratio());
    }

    #[test]
    fn default_layout_has_every_handle() {
        let regions = layout_handles(container(), &ResizerOptions::default(), &HandleMetrics::default());
        let handles: Vec<Handle> = regions.iter().map(|r| r.handle).collect();
        assert_eq!(
            handles,
            vec![
                Handle::Drag,
                Handle::Edge(Side::Right),
                Handle::Edge(Side::Bottom),
                Handle::Corner
            ]
        );
        // draggable 默认关闭：拖动条存在但不响应
        assert!(!regions[0].wired);
        assert!(regions[1..].iter().all(|r| r.wired));
    }

    #[test]
    fn edges_are_independently_optional() {
        let options = ResizerOptions {
            right: false,
            ..ResizerOptions::default()
        };
        let regions = layout_handles(container(), &options, &HandleMetrics::default());
        assert!(regions.iter().all(|r| r.handle != Handle::Edge(Side::Right)));
        assert!(regions.iter().any(|r| r.handle == Handle::Edge(Side::Bottom)));
        assert!(regions.iter().any(|r| r.handle == Handle::Corner));
    }

    #[test]
    fn hit_test_prefers_topmost() {
        let regions = layout_handles(container(), &ResizerOptions::default(), &HandleMetrics::default());
        // 右上角同时落在拖动条与角柄上，角柄在上层
        let hit = hit_test_handle(Point::new(295.0, 104.0), &regions).unwrap();
        assert_eq!(hit.handle, Handle::Corner);
        let hit = hit_test_handle(Point::new(297.0, 150.0), &regions).unwrap();
        assert_eq!(hit.handle, Handle::Edge(Side::Right));
        let hit = hit_test_handle(Point::new(150.0, 197.0), &regions).unwrap();
        assert_eq!(hit.handle, Handle::Edge(Side::Bottom));
        let hit = hit_test_handle(Point::new(150.0, 105.0), &regions).unwrap();
        assert_eq!(hit.handle, Handle::Drag);
        assert!(hit_test_handle(Point::new(150.0, 150.0), &regions).is_none());
    }
}
