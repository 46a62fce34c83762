// ==========================================
// 引擎层 - 纯计算, 无副作用
// ==========================================

pub mod aggregator; // 筛选聚合引擎
pub mod priority; // 优先级评分引擎
pub mod radar; // 风险雷达引擎

pub use aggregator::{AggregateResult, OrderAggregator, OrderFilters, PresetCounts, StatusCounts};
pub use priority::PriorityEngine;
pub use radar::{AlertDashboardCounts, RadarEngine, RiskRadarSummary};
