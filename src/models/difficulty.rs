use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// 难度枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 简单
    Easy,
    /// 中等
    Intermediate,
    /// 困难
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Easy,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// 写入 JSON 的标签
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// 用于日志显示的名称
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "简单",
            Difficulty::Intermediate => "中等",
            Difficulty::Advanced => "困难",
        }
    }

    /// 根据题目位置（从0开始）计算难度
    ///
    /// 前 `band_size` 道为 easy，接下来 `band_size` 道为 intermediate，
    /// 其余全部为 advanced（没有上限）。
    pub fn for_position(index: usize, band_size: NonZeroUsize) -> Self {
        match index / band_size.get() {
            0 => Difficulty::Easy,
            1 => Difficulty::Intermediate,
            _ => Difficulty::Advanced,
        }
    }

    /// 从标签解析难度（忽略大小写）
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(label.trim()))
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
