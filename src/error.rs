use std::path::{Path, PathBuf};

use thiserror::Error;

/// 应用程序错误类型
///
/// 只区分两类：输入文件缺失 / 其他任何意外错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入文件不存在或无法读取
    #[error("无法读取文件 {}: {}", .path.display(), .source)]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 解析、处理或写入过程中的其他错误
    #[error("{message}")]
    UnexpectedFailure { message: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建输入文件缺失错误
    pub fn missing_input(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AppError::MissingInput {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 创建意外错误
    pub fn unexpected(message: impl Into<String>) -> Self {
        AppError::UnexpectedFailure {
            message: message.into(),
        }
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, AppError::MissingInput { .. })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::unexpected(format!("JSON处理失败: {}", err))
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_display_contains_path() {
        let err = AppError::missing_input(
            "themes/kubernetes.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.is_missing_input());
        assert!(err.to_string().contains("themes/kubernetes.json"));
    }

    #[test]
    fn test_json_error_becomes_unexpected_failure() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert!(!err.is_missing_input(), "JSON错误应归为意外错误");
        assert!(err.to_string().starts_with("JSON处理失败"));
    }
}
