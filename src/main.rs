use add_difficulty::utils::logging;
use add_difficulty::{App, Config};
use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::error;

/// 使用固定配置执行一次 加载 → 标注 → 保存
///
/// 失败时输出一行错误信息并以状态码 1 退出（不 panic，不写文件），
/// 便于脚本和 CI 判断是否成功。
fn main() -> ExitCode {
    // 初始化日志
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ 错误: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::default();
    let source_path = config.source_path.clone();

    App::new(config)
        .run()
        .with_context(|| format!("处理题目文件失败: {}", source_path.display()))?;

    Ok(())
}
