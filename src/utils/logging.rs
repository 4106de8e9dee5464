//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数

use crate::models::Difficulty;
use crate::services::DifficultyTally;
use std::path::Path;
use std::sync::Once;
use tracing::info;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// 初始化日志
///
/// 默认级别 info，可通过 `RUST_LOG` 覆盖；重复调用无副作用
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

/// 记录程序启动信息
///
/// # 参数
/// - `source_path`: 题目文件路径
/// - `band_size`: 每档题目数量
pub fn log_startup(source_path: &Path, band_size: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题目难度标注");
    info!("📄 题目文件: {}", source_path.display());
    info!("📊 每档题目数: {}", band_size);
    info!("{}", "=".repeat(60));
}

/// 记录题目加载信息
pub fn log_questions_loaded(total: usize, title: Option<&str>) {
    match title {
        Some(title) => info!("✓ 找到 {} 道题目 ({})", total, title),
        None => info!("✓ 找到 {} 道题目", total),
    }
}

/// 打印难度分布
///
/// # 参数
/// - `tally`: 各难度数量
pub fn log_tally(tally: &DifficultyTally) {
    info!("\n{}", "─".repeat(60));
    info!("📋 难度分布:");
    for difficulty in Difficulty::ALL {
        info!(
            "  - {} ({}): {} 道题目",
            difficulty.name(),
            difficulty,
            tally.count(difficulty)
        );
    }
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `total`: 题目总数
/// - `source_path`: 已更新的题目文件
pub fn print_final_stats(total: usize, source_path: &Path) {
    info!("\n{}", "=".repeat(60));
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 文件已更新: {}", source_path.display());
    info!("✅ 共计: {} 道题目", total);
    info!("{}", "=".repeat(60));
}
