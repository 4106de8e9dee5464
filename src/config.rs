use std::num::NonZeroUsize;
use std::path::PathBuf;

/// 每个难度档位的题目数量
pub const DEFAULT_BAND_SIZE: NonZeroUsize = match NonZeroUsize::new(50) {
    Some(size) => size,
    None => unreachable!(),
};

/// 程序配置
///
/// 程序本身只使用 `Config::default()`，不读取环境变量或配置文件
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// 题目文件路径（读取后原地覆盖）
    pub source_path: PathBuf,
    /// 题目数组所在的字段名
    pub questions_key: String,
    /// 主题列表文件，设置后会同步 has_difficulty / questions_count
    pub themes_list_path: Option<PathBuf>,
    /// 每档题目数量
    pub band_size: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("themes/kubernetes.json"),
            questions_key: "questions".to_string(),
            themes_list_path: None,
            band_size: DEFAULT_BAND_SIZE,
        }
    }
}

impl Config {
    /// 指定题目文件路径
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }

    /// 指定主题列表文件路径
    pub fn with_themes_list_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.themes_list_path = Some(path.into());
        self
    }

    pub fn with_band_size(mut self, band_size: NonZeroUsize) -> Self {
        self.band_size = band_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_fixed_policy() {
        let config = Config::default();
        assert_eq!(config.source_path, PathBuf::from("themes/kubernetes.json"));
        assert_eq!(config.questions_key, "questions");
        assert_eq!(config.band_size.get(), 50);
        assert!(config.themes_list_path.is_none(), "默认不同步主题列表");
    }

    #[test]
    fn test_builders_only_change_their_field() {
        let band = NonZeroUsize::new(2).unwrap();
        let config = Config::default()
            .with_source_path("themes/docker.json")
            .with_band_size(band);
        assert_eq!(config.source_path, PathBuf::from("themes/docker.json"));
        assert_eq!(config.band_size, band);
        assert_eq!(config.questions_key, "questions");
        assert!(config.themes_list_path.is_none());
    }
}
