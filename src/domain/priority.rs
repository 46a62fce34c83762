// ==========================================
// 订单运营监控 - 优先级值对象
// ==========================================
// 红线: 每次评估重新计算, 永不持久化
// ==========================================

use crate::domain::order::Order;
use crate::domain::types::PriorityLevel;
use serde::{Deserialize, Serialize};

// ==========================================
// PriorityInfo - 优先级评估结果
// ==========================================
// 同一 (order, now) 的两次评估结果必须逐字节一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityInfo {
    pub level: PriorityLevel, // 分数的确定性映射
    pub score: u32,           // 加法累积的紧急度分数
    pub tags: Vec<String>,    // 风险标签（去重, 保留首次插入顺序）
    pub reasons: Vec<String>, // 命中规则的审计轨迹（按评估顺序, 不去重）
}

impl PriorityInfo {
    /// 是否达到危急层级
    pub fn is_critical(&self) -> bool {
        self.level == PriorityLevel::Critical
    }
}

// ==========================================
// ScoredOrder - 已评分订单
// ==========================================
// 评分附着在包装上, 不回写 Order（核心不得修改输入）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredOrder {
    pub order: Order,
    pub priority: PriorityInfo,
}

impl ScoredOrder {
    /// 排序主键
    pub fn priority_score(&self) -> u32 {
        self.priority.score
    }
}
