// ==========================================
// 订单运营监控 - 风险雷达引擎
// ==========================================
// 职责: 订单集合 → 告警面板计数 + 风险雷达摘要
// 依据: 两组计数都按"订单数"统计, 一单多条告警只计一次
// 红线: 雷达时间窗口两端不含零 - 剩余恰好为零不计入任何档
// ==========================================

use crate::domain::order::Order;
use crate::domain::types::{AlertPriority, AlertType, OrderStatus, ProductType};
use crate::engine::aggregator::OrderAggregator;
use crate::engine::priority::{FRESH_PACKING_WINDOW_MINS, PREVIEW_RISK_WINDOW_MINS};
use chrono::{DateTime, Duration, Utc};
use tracing::instrument;

// ==========================================
// 告警面板计数
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertDashboardCounts {
    pub critical_alerts: usize,    // 含活跃严重告警的订单
    pub sla_breaches: usize,       // 含活跃 SLA 违约告警的订单
    pub preview_disputes: usize,   // 含活跃预览争议告警的订单
    pub delivery_failures: usize,  // 含活跃派送失败告警的订单
    pub vendor_delays: usize,      // 含活跃商家延迟告警的订单
    pub requires_action: usize,    // 标记为待处理的订单
}

// ==========================================
// 风险雷达摘要
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RiskRadarSummary {
    pub preview_at_risk: usize,  // 预览截止60分钟内（未超时）
    pub preview_breached: usize, // 预览截止已过
    pub fresh_at_risk: usize,    // 生鲜打包截止45分钟内（未超时）
    pub fresh_breached: usize,   // 生鲜打包截止已过且未送达
    pub stuck_delivery: usize,   // 派送滞留超24小时
    pub rto_active: usize,       // 逆向物流进行中
}

// ==========================================
// RadarEngine - 风险雷达引擎
// ==========================================
pub struct RadarEngine {
    // 无状态引擎
}

impl RadarEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 告警面板
    // ==========================================

    /// 告警面板计数: 每项按含对应活跃告警的订单数统计
    #[instrument(skip(self, orders), fields(count = orders.len()))]
    pub fn alert_dashboard(&self, orders: &[Order]) -> AlertDashboardCounts {
        AlertDashboardCounts {
            critical_alerts: orders
                .iter()
                .filter(|o| o.has_active_alert_with_priority(AlertPriority::Critical))
                .count(),
            sla_breaches: Self::count_with_alert(orders, AlertType::SlaBreach),
            preview_disputes: Self::count_with_alert(orders, AlertType::PreviewDispute),
            delivery_failures: Self::count_with_alert(orders, AlertType::DeliveryFailure),
            vendor_delays: Self::count_with_alert(orders, AlertType::VendorDelay),
            requires_action: orders.iter().filter(|o| o.requires_admin_action).count(),
        }
    }

    fn count_with_alert(orders: &[Order], alert_type: AlertType) -> usize {
        orders
            .iter()
            .filter(|o| o.has_active_alert_of_type(alert_type))
            .count()
    }

    // ==========================================
    // 风险雷达
    // ==========================================

    /// 风险雷达摘要: 基于截止时间窗口的前瞻性计数
    ///
    /// 临近档要求剩余严格大于零, 已超时档要求截止严格早于当前时刻;
    /// 剩余恰好为零不计入任何档。
    #[instrument(skip(self, orders), fields(count = orders.len()))]
    pub fn risk_radar(&self, orders: &[Order], now: DateTime<Utc>) -> RiskRadarSummary {
        let mut summary = RiskRadarSummary::default();

        for order in orders {
            // 预览审批窗口
            if order.status == OrderStatus::AwaitingApproval {
                if let Some(deadline) = order.preview_sla_deadline {
                    let remaining = deadline.signed_duration_since(now);
                    if remaining < Duration::zero() {
                        summary.preview_breached += 1;
                    } else if remaining > Duration::zero()
                        && remaining <= Duration::minutes(PREVIEW_RISK_WINDOW_MINS)
                    {
                        summary.preview_at_risk += 1;
                    }
                }
            }

            // 生鲜打包窗口（仅易腐生鲜, 已送达订单不再计入超时）
            if order.product_type == ProductType::FreshPerishable {
                if let Some(deadline) = order.packing_deadline {
                    let remaining = deadline.signed_duration_since(now);
                    if remaining < Duration::zero() {
                        if order.status != OrderStatus::Delivered {
                            summary.fresh_breached += 1;
                        }
                    } else if remaining > Duration::zero()
                        && remaining <= Duration::minutes(FRESH_PACKING_WINDOW_MINS)
                    {
                        summary.fresh_at_risk += 1;
                    }
                }
            }

            // 派送滞留
            if OrderAggregator::is_stuck_in_delivery(order, now) {
                summary.stuck_delivery += 1;
            }

            // 逆向物流
            if order.rto_status.is_active() {
                summary.rto_active += 1;
            }
        }

        summary
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for RadarEngine {
    fn default() -> Self {
        Self::new()
    }
}
