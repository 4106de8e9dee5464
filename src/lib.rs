//! # Add Difficulty
//!
//! 为题库 JSON 文件中的每道题目按顺序标注难度
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目数据结构与 JSON 读写
//! - `QuestionRecord` - 单道题目，保留所有原始字段
//! - `QuestionDocument` - 题目文件，题目数组之外的字段原样保留
//!
//! ### ② 业务能力层（Services）
//! - `DifficultyAssigner` - 按位置分配难度（每档 50 道）
//! - `DifficultyTally` - 各难度计数
//! - `ThemeIndex` - 同步 themes-list.json
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator::App` - 加载 → 标注 → 保存
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Difficulty, QuestionDocument, QuestionRecord};
pub use orchestrator::{App, RunReport};
pub use services::{DifficultyAssigner, DifficultyTally, ThemeIndex};
