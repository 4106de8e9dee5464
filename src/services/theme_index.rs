//! 主题列表同步服务 - 业务能力层
//!
//! 题目文件加上难度后，在 themes-list.json 中标记 `has_difficulty`，
//! 前端据此显示难度选择。

use crate::error::{AppError, AppResult};
use crate::models::write_json_pretty;
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// 主题列表同步服务
pub struct ThemeIndex {
    path: PathBuf,
}

impl ThemeIndex {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 更新 `file` 与题目文件名相同的主题
    ///
    /// # 参数
    /// - `theme_file`: 题目文件名（如 `kubernetes.json`）
    /// - `questions_count`: 题目总数
    ///
    /// # 返回
    /// 找到并更新了主题返回 `true`，没有匹配的主题返回 `false`
    pub fn mark_has_difficulty(&self, theme_file: &str, questions_count: usize) -> AppResult<bool> {
        let raw = fs::read(&self.path).map_err(|e| AppError::missing_input(&self.path, e))?;
        let mut index: Value = serde_json::from_slice(&raw).map_err(|e| {
            AppError::unexpected(format!("无法解析主题列表 {}: {}", self.path.display(), e))
        })?;

        let themes = index
            .get_mut("themes")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| {
                AppError::unexpected(format!(
                    "主题列表缺少 \"themes\" 数组: {}",
                    self.path.display()
                ))
            })?;

        let Some(theme) = themes
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|theme| theme.get("file").and_then(Value::as_str) == Some(theme_file))
        else {
            debug!("主题列表中没有 file = {} 的主题", theme_file);
            return Ok(false);
        };

        update_theme(theme, questions_count);
        write_json_pretty(&self.path, &index)?;

        info!(
            "✓ 已更新主题列表: {} ({} 道题目)",
            theme_file, questions_count
        );
        Ok(true)
    }
}

fn update_theme(theme: &mut Map<String, Value>, questions_count: usize) {
    theme.insert("questions_count".to_string(), Value::from(questions_count));
    theme.insert("has_difficulty".to_string(), Value::Bool(true));
}
