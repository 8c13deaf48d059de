use serde::Deserialize;

// 尺寸上下限，两端均为开区间
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_width: 0.0,
            max_width: f64::INFINITY,
            min_height: 0.0,
            max_height: f64::INFINITY,
        }
    }
}

impl Bounds {
    pub fn admits_width(&self, width: f64) -> bool {
        width > self.min_width && width < self.max_width
    }

    pub fn admits_height(&self, height: f64) -> bool {
        height > self.min_height && height < self.max_height
    }
}
