// Container: 被包裹的定位元素。自然布局矩形 + 内联样式覆盖（width/height/left/top）
// 测量方式与浏览器一致：computed size 按整数解析（截断），offset 四舍五入到整像素

use crate::geometry::{Point, Rect, Size};
use crate::resizer::handles::classes;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InlineStyle {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub left: Option<f64>,
    pub top: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct Container {
    natural: Rect,
    style: InlineStyle,
    class_list: String,
}

impl Container {
    pub fn new(natural: Rect, extra_class: &str) -> Self {
        let class_list = if extra_class.trim().is_empty() {
            classes::CONTAINER.to_string()
        } else {
            format!("{} {}", classes::CONTAINER, extra_class.trim())
        };
        Self {
            natural,
            style: InlineStyle::default(),
            class_list,
        }
    }

    pub fn class_list(&self) -> &str {
        &self.class_list
    }

    pub fn style(&self) -> InlineStyle {
        self.style
    }

    // 内联样式优先于自然布局
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.style.left.unwrap_or(self.natural.left),
            self.style.top.unwrap_or(self.natural.top),
            self.style.width.unwrap_or(self.natural.width),
            self.style.height.unwrap_or(self.natural.height),
        )
    }

    pub fn computed_size(&self) -> Size {
        let r = self.rect();
        Size::new(r.width.trunc(), r.height.trunc())
    }

    // 等价于 offsetLeft / offsetTop
    pub fn offset(&self) -> Point {
        let r = self.rect();
        Point::new(r.left.round(), r.top.round())
    }

    pub fn set_width(&mut self, width: f64) {
        self.style.width = Some(width);
    }

    pub fn set_height(&mut self, height: f64) {
        self.style.height = Some(height);
    }

    pub fn set_left(&mut self, left: f64) {
        self.style.left = Some(left);
    }

    pub fn set_top(&mut self, top: f64) {
        self.style.top = Some(top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_merges_extra_class() {
        let c = Container::new(Rect::new(0.0, 0.0, 10.0, 10.0), "my-element");
        assert_eq!(c.class_list(), "resizeable-element my-element");
        let plain = Container::new(Rect::new(0.0, 0.0, 10.0, 10.0), "  ");
        assert_eq!(plain.class_list(), "resizeable-element");
    }

    #[test]
    fn inline_style_overrides_natural_layout() {
        let mut c = Container::new(Rect::new(5.0, 6.0, 200.0, 100.0), "");
        c.set_width(250.0);
        c.set_top(40.0);
        assert_eq!(c.rect(), Rect::new(5.0, 40.0, 250.0, 100.0));
    }

    #[test]
    fn setters_only_touch_inline_style() {
        let mut c = Container::new(Rect::new(0.0, 0.0, 200.0, 100.0), "");
        assert_eq!(c.style(), InlineStyle::default());
        c.set_height(120.0);
        c.set_left(-30.0);
        assert_eq!(
            c.style(),
            InlineStyle {
                width: None,
                height: Some(120.0),
                left: Some(-30.0),
                top: None,
            }
        );
    }

    #[test]
    fn computed_size_truncates_and_offset_rounds() {
        let mut c = Container::new(Rect::new(10.4, 20.6, 200.0, 100.0), "");
        c.set_width(250.9);
        c.set_height(99.2);
        assert_eq!(c.computed_size(), Size::new(250.0, 99.0));
        assert_eq!(c.offset(), Point::new(10.0, 21.0));
    }
}
