//! 难度标注主流程 - 编排层
//!
//! 加载 → 分配难度 → 统计 → 保存 → 同步主题列表。
//! 保存是唯一的落盘点，之前任何一步失败都不会修改题目文件。

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{self, QuestionDocument};
use crate::services::{DifficultyAssigner, DifficultyTally, ThemeIndex};
use crate::utils::logging;
use std::path::{Path, PathBuf};
use tracing::warn;

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// 已更新的题目文件
    pub source_path: PathBuf,
    /// 题目总数
    pub total: usize,
    /// 各难度数量
    pub tally: DifficultyTally,
    /// 是否更新了主题列表
    pub theme_index_updated: bool,
}

/// 应用主结构
pub struct App {
    config: Config,
    assigner: DifficultyAssigner,
}

impl App {
    pub fn new(config: Config) -> Self {
        let assigner = DifficultyAssigner::new(config.band_size);
        Self { config, assigner }
    }

    /// 运行完整的 加载 → 标注 → 保存 流程
    pub fn run(&self) -> AppResult<RunReport> {
        let source_path = &self.config.source_path;
        logging::log_startup(source_path, self.config.band_size.get());

        let mut document = models::load_document(source_path, &self.config.questions_key)?;
        let total = document.len();
        logging::log_questions_loaded(total, document.title());

        let tally = self.annotate(&mut document);
        logging::log_tally(&tally);

        models::save_document(source_path, &document)?;

        let theme_index_updated = self.sync_theme_index(source_path, total);

        logging::print_final_stats(total, source_path);

        Ok(RunReport {
            source_path: source_path.clone(),
            total,
            tally,
            theme_index_updated,
        })
    }

    /// 分配难度并重新统计
    pub fn annotate(&self, document: &mut QuestionDocument) -> DifficultyTally {
        self.assigner.assign(document.questions_mut());
        DifficultyTally::from_questions(document.questions())
    }

    /// 同步主题列表（可选，失败只记录警告）
    fn sync_theme_index(&self, source_path: &Path, total: usize) -> bool {
        let Some(index_path) = &self.config.themes_list_path else {
            return false;
        };

        let Some(theme_file) = source_path.file_name().and_then(|name| name.to_str()) else {
            warn!("⚠️ 无法获取题目文件名，跳过主题列表同步");
            return false;
        };

        match ThemeIndex::new(index_path).mark_has_difficulty(theme_file, total) {
            Ok(true) => true,
            Ok(false) => {
                warn!(
                    "⚠️ 主题列表 {} 中没有 {} 对应的主题",
                    index_path.display(),
                    theme_file
                );
                false
            }
            Err(e) => {
                warn!("⚠️ 主题列表同步失败，题目文件已保存: {}", e);
                false
            }
        }
    }
}
