//! 难度分配服务 - 业务能力层
//!
//! 只根据题目位置分配难度，不关心题目内容，也不关心文件读写

use crate::models::{Difficulty, QuestionRecord};
use std::num::NonZeroUsize;
use tracing::debug;

/// 难度分配器
///
/// 规则（B = band_size）：
/// - 位置 `i < B` → easy
/// - `B <= i < 2B` → intermediate
/// - `i >= 2B` → advanced
///
/// 已有的 `difficulty` 字段会被覆盖，重复执行结果不变。
#[derive(Debug, Clone, Copy)]
pub struct DifficultyAssigner {
    band_size: NonZeroUsize,
}

impl DifficultyAssigner {
    pub fn new(band_size: NonZeroUsize) -> Self {
        Self { band_size }
    }

    /// 指定位置的难度
    pub fn label_for(&self, index: usize) -> Difficulty {
        Difficulty::for_position(index, self.band_size)
    }

    /// 为所有题目原地写入难度
    pub fn assign(&self, questions: &mut [QuestionRecord]) {
        for (index, question) in questions.iter_mut().enumerate() {
            question.set_difficulty(self.label_for(index));
        }
        debug!(
            "已为 {} 道题目分配难度 (每档 {} 道)",
            questions.len(),
            self.band_size
        );
    }
}
