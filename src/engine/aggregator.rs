// ==========================================
// 订单运营监控 - 筛选聚合引擎
// ==========================================
// 职责: 订单集合 → 筛选 + 排序 + 状态/预设计数
// 依据: 筛选链按固定顺序逐级收窄, 各条件之间取交集
// 红线: 计数永远基于完整集合, 不受当前筛选影响
// 红线: 排序必须稳定 - 分数与更新时间都相同时保持输入顺序
// ==========================================

use crate::domain::order::Order;
use crate::domain::priority::ScoredOrder;
use crate::domain::types::{AlertPriority, AlertType, OrderStatus, ProductType, RiskPreset};
use crate::engine::priority::{PriorityEngine, DELIVERY_STUCK_HOURS};
use chrono::{DateTime, Duration, Utc};
use tracing::instrument;

// ==========================================
// 筛选条件
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct OrderFilters {
    pub status: Option<OrderStatus>,          // 订单状态
    pub alert_type: Option<AlertType>,        // 按活跃告警类型
    pub alert_priority: Option<AlertPriority>, // 按活跃告警优先级
    pub vendor_id: Option<String>,            // 按商家
    pub requires_action_only: bool,           // 仅看待处理
    pub preset: Option<RiskPreset>,           // 风险预设（最多一个）
    pub search: String,                       // 关键词搜索（空串=不过滤）
}

// ==========================================
// 状态计数
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct StatusCounts {
    pub all: usize,                              // 全部订单
    pub active: usize,                           // 进行中（非已送达）
    pub by_status: Vec<(OrderStatus, usize)>,    // 每个状态一项, 含零计数
}

impl StatusCounts {
    pub fn count_for(&self, status: OrderStatus) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

// ==========================================
// 预设计数
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCounts {
    pub critical: usize,          // 严重层级订单
    pub delivery_failures: usize, // 派送异常订单
    pub awaiting_preview: usize,  // 等待预览审批订单
    pub fresh_only: usize,        // 进行中的易腐生鲜订单
}

// ==========================================
// 聚合结果
// ==========================================
#[derive(Debug, Clone)]
pub struct AggregateResult {
    pub filtered: Vec<ScoredOrder>,   // 筛选+排序后的订单
    pub status_counts: StatusCounts,  // 基于完整集合
    pub preset_counts: PresetCounts,  // 基于完整集合
}

// ==========================================
// OrderAggregator - 筛选聚合引擎
// ==========================================
pub struct OrderAggregator {
    priority_engine: PriorityEngine, // 评分引擎（无状态）
}

impl OrderAggregator {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            priority_engine: PriorityEngine::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 聚合入口: 评分 → 筛选 → 排序 → 计数
    ///
    /// 计数基于完整集合, 筛选结果不影响计数。
    #[instrument(skip(self, orders, filters), fields(count = orders.len()))]
    pub fn aggregate(
        &self,
        orders: &[Order],
        filters: &OrderFilters,
        now: DateTime<Utc>,
    ) -> AggregateResult {
        let scored = self.priority_engine.evaluate_batch(orders, now);

        let status_counts = Self::status_counts(&scored);
        let preset_counts = Self::preset_counts(&scored, now);

        let mut filtered: Vec<ScoredOrder> = scored
            .into_iter()
            .filter(|s| Self::matches(s, filters, now))
            .collect();

        // 稳定排序: 分数降序, 同分按更新时间降序, 再同则保持输入顺序
        filtered.sort_by(|a, b| {
            b.priority_score()
                .cmp(&a.priority_score())
                .then_with(|| b.order.updated_at.cmp(&a.order.updated_at))
        });

        AggregateResult {
            filtered,
            status_counts,
            preset_counts,
        }
    }

    // ==========================================
    // 筛选链
    // ==========================================

    /// 单订单匹配判定（所有条件取交集）
    fn matches(scored: &ScoredOrder, filters: &OrderFilters, now: DateTime<Utc>) -> bool {
        let order = &scored.order;

        // 1. 订单状态
        if let Some(status) = filters.status {
            if order.status != status {
                return false;
            }
        }

        // 2. 活跃告警类型
        if let Some(alert_type) = filters.alert_type {
            if !order.has_active_alert_of_type(alert_type) {
                return false;
            }
        }

        // 3. 活跃告警优先级
        if let Some(priority) = filters.alert_priority {
            if !order.has_active_alert_with_priority(priority) {
                return false;
            }
        }

        // 4. 商家
        if let Some(vendor_id) = &filters.vendor_id {
            if &order.vendor_id != vendor_id {
                return false;
            }
        }

        // 5. 仅看待处理
        if filters.requires_action_only && !order.requires_admin_action {
            return false;
        }

        // 6. 风险预设
        if let Some(preset) = filters.preset {
            if !Self::matches_preset(scored, preset, now) {
                return false;
            }
        }

        // 7. 关键词搜索
        order.matches_search(&filters.search)
    }

    /// 预设谓词
    fn matches_preset(scored: &ScoredOrder, preset: RiskPreset, now: DateTime<Utc>) -> bool {
        let order = &scored.order;
        match preset {
            RiskPreset::Critical => scored.priority.is_critical(),
            RiskPreset::DeliveryFailures => {
                order.has_active_alert_of_type(AlertType::DeliveryFailure)
                    || order.rto_status.is_active()
                    || Self::is_stuck_in_delivery(order, now)
            }
            RiskPreset::AwaitingPreview => {
                order.status == OrderStatus::AwaitingApproval
                    && order.preview_sla_deadline.is_some()
            }
            RiskPreset::FreshOnly => {
                order.product_type == ProductType::FreshPerishable
                    && order.status != OrderStatus::Delivered
            }
        }
    }

    /// 派送滞留判定: 出库超过24小时仍在派送
    pub(crate) fn is_stuck_in_delivery(order: &Order, now: DateTime<Utc>) -> bool {
        order.status == OrderStatus::OutForDelivery
            && order
                .out_for_delivery_since
                .map(|since| now.signed_duration_since(since) > Duration::hours(DELIVERY_STUCK_HOURS))
                .unwrap_or(false)
    }

    // ==========================================
    // 计数统计
    // ==========================================

    /// 状态计数: 每个状态一项, 含零计数
    fn status_counts(scored: &[ScoredOrder]) -> StatusCounts {
        let by_status = OrderStatus::ALL
            .iter()
            .map(|&status| {
                let n = scored.iter().filter(|s| s.order.status == status).count();
                (status, n)
            })
            .collect();

        StatusCounts {
            all: scored.len(),
            active: scored
                .iter()
                .filter(|s| s.order.status != OrderStatus::Delivered)
                .count(),
            by_status,
        }
    }

    /// 预设计数
    fn preset_counts(scored: &[ScoredOrder], now: DateTime<Utc>) -> PresetCounts {
        let count = |preset: RiskPreset| {
            scored
                .iter()
                .filter(|s| Self::matches_preset(s, preset, now))
                .count()
        };

        PresetCounts {
            critical: count(RiskPreset::Critical),
            delivery_failures: count(RiskPreset::DeliveryFailures),
            awaiting_preview: count(RiskPreset::AwaitingPreview),
            fresh_only: count(RiskPreset::FreshOnly),
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for OrderAggregator {
    fn default() -> Self {
        Self::new()
    }
}
