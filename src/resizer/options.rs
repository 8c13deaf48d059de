use serde::Deserialize;

use crate::resizer::bounds::Bounds;
use crate::resizer::handles::Side;

// ResizerOptions: 单个容器的配置，YAML 中所有字段可选
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResizerOptions {
    // 合并到容器上的额外类名
    pub class_name: String,
    #[serde(flatten)]
    pub bounds: Bounds,
    pub right: bool,
    pub bottom: bool,
    pub draggable: bool,
}

impl Default for ResizerOptions {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            bounds: Bounds::default(),
            right: true,
            bottom: true,
            draggable: false,
        }
    }
}

impl ResizerOptions {
    pub fn edges(&self) -> impl Iterator<Item = Side> {
        [(Side::Right, self.right), (Side::Bottom, self.bottom)]
            .into_iter()
            .filter_map(|(side, enabled)| enabled.then_some(side))
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn with_edges(mut self, edges: &[Side]) -> Self {
        self.right = edges.contains(&Side::Right);
        self.bottom = edges.contains(&Side::Bottom);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = ResizerOptions::default();
        assert!(o.right && o.bottom && !o.draggable);
        assert_eq!(o.bounds, Bounds::default());
        assert_eq!(o.edges().collect::<Vec<_>>(), vec![Side::Right, Side::Bottom]);
    }

    #[test]
    fn yaml_fields_are_optional() {
        let o: ResizerOptions = serde_yaml::from_str("min_width: 50\nmax_width: 500\ndraggable: true\nbottom: false\n").unwrap();
        assert_eq!(o.bounds.min_width, 50.0);
        assert_eq!(o.bounds.max_width, 500.0);
        assert_eq!(o.bounds.max_height, f64::INFINITY);
        assert!(o.draggable);
        assert_eq!(o.edges().collect::<Vec<_>>(), vec![Side::Right]);
    }

    #[test]
    fn with_edges_replaces_both_toggles() {
        let o = ResizerOptions::default().with_edges(&[Side::Bottom]);
        assert!(!o.right);
        assert!(o.bottom);
    }
}
