//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (一次完整的 加载 → 标注 → 保存)
//!     ↓
//! services (能力层：assign / tally / theme index)
//!     ↓
//! models (题目数据与 JSON 读写)
//! ```

pub mod app;

pub use app::{App, RunReport};
