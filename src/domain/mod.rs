// ==========================================
// 订单运营监控 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、值对象
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod order;
pub mod priority;
pub mod types;

// 重导出核心类型
pub use order::{AdminAlert, CustomerComplaint, Order};
pub use priority::{PriorityInfo, ScoredOrder};
pub use types::{
    AlertPriority, AlertType, OrderStatus, PriorityLevel, ProductType, RiskPreset, RtoStatus,
};
