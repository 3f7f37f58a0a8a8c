//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责单次运行的调度和资源管理，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! run_processor (一次完整运行，持有 Browser)
//!     ↓
//! workflow::AcceptFlow (扫描 → 点击 → 刷新循环)
//!     ↓
//! services (能力层：delay / login / navigate)
//!     ↓
//! infrastructure (基础设施：CdpSession)
//! ```
//!
//! ## 设计原则
//!
//! 1. **资源隔离**：只有编排层持有 Browser，保证关闭恰好一次
//! 2. **向下依赖**：编排层 → workflow → services → infrastructure
//! 3. **错误兜底**：传播上来的失败在这里收口，进程永远不随运行一起死

pub mod run_processor;

// 重新导出主要类型
pub use run_processor::RunProcessor;
