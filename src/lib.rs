// ==========================================
// 电商订单运营监控 - 核心库
// ==========================================
// 技术栈: Rust + serde + chrono
// 系统定位: 决策支持库 (评分/筛选/雷达, 不落库不发网)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    AlertPriority, AlertType, OrderStatus, PriorityLevel, ProductType, RiskPreset, RtoStatus,
};

// 领域实体
pub use domain::{AdminAlert, CustomerComplaint, Order, PriorityInfo, ScoredOrder};

// 引擎
pub use engine::{
    AggregateResult, AlertDashboardCounts, OrderAggregator, OrderFilters, PresetCounts,
    PriorityEngine, RadarEngine, RiskRadarSummary, StatusCounts,
};

// API
pub use api::{ApiError, ApiResult, OrderListResponse, TriageApi, VendorOption};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "电商订单运营监控";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
