// 演示页面配置：RESIZER_CONFIG 指向 YAML 文件，RESIZER_EDGES（如 right,bottom）只启用列出的边
// 未知的边视为配置错误

use std::env;
use std::path::Path;

use log::info;

use crate::error::ResizerError;
use crate::resizer::{ResizerOptions, Side};

pub const CONFIG_ENV: &str = "RESIZER_CONFIG";
pub const EDGES_ENV: &str = "RESIZER_EDGES";

// 演示页面默认值：可拖动 + 额外类名
pub fn demo_options() -> ResizerOptions {
    ResizerOptions::default()
        .draggable(true)
        .with_class_name("my-element")
}

pub fn load_options_file(path: &Path) -> Result<ResizerOptions, ResizerError> {
    let content = std::fs::read_to_string(path).map_err(|e| ResizerError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_options_yaml(&content).map_err(|e| ResizerError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn parse_options_yaml(yaml: &str) -> Result<ResizerOptions, serde_yaml::Error> {
    // 空文件视为全部默认
    if yaml.trim().is_empty() {
        return Ok(ResizerOptions::default());
    }
    serde_yaml::from_str(yaml)
}

pub fn parse_edges(list: &str) -> Result<Vec<Side>, ResizerError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Side>())
        .collect()
}

pub fn load_options() -> Result<ResizerOptions, ResizerError> {
    let mut options = match env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = Path::new(&path);
            info!("loading resizer options from {}", path.display());
            load_options_file(path)?
        }
        None => demo_options(),
    };
    if let Ok(edges) = env::var(EDGES_ENV) {
        let edges = parse_edges(&edges)?;
        options = options.with_edges(&edges);
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn demo_options_match_demo_page() {
        let o = demo_options();
        assert!(o.draggable);
        assert_eq!(o.class_name, "my-element");
        assert!(o.right && o.bottom);
    }

    #[test]
    fn loads_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "class_name: panel\nmin_height: 20\nmax_height: 300\nright: false").unwrap();
        let o = load_options_file(file.path()).unwrap();
        assert_eq!(o.class_name, "panel");
        assert_eq!(o.bounds.min_height, 20.0);
        assert_eq!(o.bounds.max_height, 300.0);
        assert!(!o.right);
        assert!(!o.draggable);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = load_options_file(Path::new("/nonexistent/resizer.yaml")).unwrap_err();
        assert!(matches!(err, ResizerError::Config { .. }));
    }

    #[test]
    fn empty_yaml_gives_defaults() {
        assert_eq!(parse_options_yaml("\n").unwrap(), ResizerOptions::default());
    }

    #[test]
    fn edges_list() {
        assert_eq!(parse_edges("right, bottom").unwrap(), vec![Side::Right, Side::Bottom]);
        assert_eq!(parse_edges("").unwrap(), Vec::<Side>::new());
        let err = parse_edges("right,left").unwrap_err();
        assert!(err.to_string().contains("left"));
    }
}
