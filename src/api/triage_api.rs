// ==========================================
// 订单运营监控 - 分诊 API 门面
// ==========================================
// 职责: 对外统一入口 - 入参校验 + 引擎编排
// 红线: 门面无状态, 订单集合由调用方显式传入
// 红线: 引擎层永不失败, 错误只来自入参校验
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::order::Order;
use crate::domain::priority::{PriorityInfo, ScoredOrder};
use crate::engine::aggregator::{OrderAggregator, OrderFilters, PresetCounts, StatusCounts};
use crate::engine::priority::PriorityEngine;
use crate::engine::radar::{AlertDashboardCounts, RadarEngine, RiskRadarSummary};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

/// 列表查询单次返回上限
pub const MAX_LIST_LIMIT: usize = 1000;

// ==========================================
// 响应类型
// ==========================================

/// 订单列表响应
#[derive(Debug, Clone)]
pub struct OrderListResponse {
    pub orders: Vec<ScoredOrder>,    // 截断后的筛选结果
    pub total_matched: usize,        // 截断前的命中总数
    pub status_counts: StatusCounts, // 基于完整集合
    pub preset_counts: PresetCounts, // 基于完整集合
}

/// 商家下拉选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorOption {
    pub id: String,
    pub name: String,
}

// ==========================================
// TriageApi - 分诊门面
// ==========================================
pub struct TriageApi {
    priority_engine: PriorityEngine,
    aggregator: OrderAggregator,
    radar: RadarEngine,
}

impl TriageApi {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            priority_engine: PriorityEngine::new(),
            aggregator: OrderAggregator::new(),
            radar: RadarEngine::new(),
        }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 单订单评估
    pub fn evaluate_order(&self, order: &Order, now: DateTime<Utc>) -> PriorityInfo {
        self.priority_engine.evaluate(order, now)
    }

    /// 订单列表查询: 筛选 + 排序 + 截断 + 计数
    #[instrument(skip(self, orders, filters), fields(count = orders.len(), limit = limit))]
    pub fn list_orders(
        &self,
        orders: &[Order],
        filters: &OrderFilters,
        limit: usize,
        now: DateTime<Utc>,
    ) -> ApiResult<OrderListResponse> {
        if limit == 0 || limit > MAX_LIST_LIMIT {
            return Err(ApiError::InvalidInput(format!(
                "limit 必须在 1-{} 之间, 实际为 {}",
                MAX_LIST_LIMIT, limit
            )));
        }

        let result = self.aggregator.aggregate(orders, filters, now);
        let total_matched = result.filtered.len();
        let mut list = result.filtered;
        list.truncate(limit);

        Ok(OrderListResponse {
            orders: list,
            total_matched,
            status_counts: result.status_counts,
            preset_counts: result.preset_counts,
        })
    }

    /// 告警面板计数
    pub fn alert_dashboard(&self, orders: &[Order]) -> AlertDashboardCounts {
        self.radar.alert_dashboard(orders)
    }

    /// 风险雷达摘要
    pub fn risk_radar(&self, orders: &[Order], now: DateTime<Utc>) -> RiskRadarSummary {
        self.radar.risk_radar(orders, now)
    }

    /// 商家下拉选项: 去重后按名称排序
    pub fn vendor_options(&self, orders: &[Order]) -> Vec<VendorOption> {
        let mut options: Vec<VendorOption> = Vec::new();
        for order in orders {
            if !options.iter().any(|v| v.id == order.vendor_id) {
                options.push(VendorOption {
                    id: order.vendor_id.clone(),
                    name: order.vendor_name.clone(),
                });
            }
        }
        options.sort_by(|a, b| a.name.cmp(&b.name));
        options
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for TriageApi {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{OrderStatus, ProductType, RtoStatus};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    fn base_order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            order_number: format!("ORD-{}", id),
            customer_name: "Priya Sharma".to_string(),
            customer_email: "priya@example.com".to_string(),
            product_name: "Custom Photo Frame".to_string(),
            product_type: ProductType::Regular,
            vendor_id: "v_01".to_string(),
            vendor_name: "Craft Corner".to_string(),
            status: OrderStatus::Preparing,
            amount: 29.0,
            created_at: now() - Duration::days(1),
            updated_at: now() - Duration::hours(1),
            preview_enabled: false,
            preview_url: None,
            preview_uploaded_at: None,
            preview_approved_at: None,
            preview_declined_at: None,
            preview_sla_deadline: None,
            sla_breach_at: None,
            packing_deadline: None,
            required_delivery_by: None,
            out_for_delivery_since: None,
            tracking_number: None,
            delivery_address: "42 Garden Road".to_string(),
            admin_flags: Vec::new(),
            rto_status: RtoStatus::None,
            vendor_delay_minutes: None,
            customer_complaint: None,
            requires_admin_action: false,
            notes: None,
        }
    }

    #[test]
    fn test_scenario_01_list_orders_rejects_zero_limit() {
        // 场景1: limit=0 → 参数错误
        let api = TriageApi::new();
        let result = api.list_orders(&[], &OrderFilters::default(), 0, now());

        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_scenario_02_list_orders_rejects_oversized_limit() {
        // 场景2: limit 超上限 → 参数错误
        let api = TriageApi::new();
        let result = api.list_orders(&[], &OrderFilters::default(), MAX_LIST_LIMIT + 1, now());

        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_scenario_03_list_orders_truncates_but_reports_total() {
        // 场景3: 截断不影响命中总数与计数
        let api = TriageApi::new();
        let orders: Vec<Order> = (0..5).map(|i| base_order(&format!("{:03}", i))).collect();

        let response = api
            .list_orders(&orders, &OrderFilters::default(), 2, now())
            .unwrap();

        assert_eq!(response.orders.len(), 2);
        assert_eq!(response.total_matched, 5);
        assert_eq!(response.status_counts.all, 5);
    }

    #[test]
    fn test_scenario_04_vendor_options_dedup_and_sort() {
        // 场景4: 商家选项去重并按名称排序
        let api = TriageApi::new();

        let mut a = base_order("001");
        a.vendor_id = "v_02".to_string();
        a.vendor_name = "Zen Bakers".to_string();

        let mut b = base_order("002");
        b.vendor_id = "v_01".to_string();
        b.vendor_name = "Craft Corner".to_string();

        let mut c = base_order("003");
        c.vendor_id = "v_02".to_string();
        c.vendor_name = "Zen Bakers".to_string();

        let options = api.vendor_options(&[a, b, c]);

        assert_eq!(
            options,
            vec![
                VendorOption {
                    id: "v_01".to_string(),
                    name: "Craft Corner".to_string()
                },
                VendorOption {
                    id: "v_02".to_string(),
                    name: "Zen Bakers".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_scenario_05_evaluate_order_passthrough() {
        // 场景5: 单订单评估与引擎一致
        let api = TriageApi::new();
        let mut order = base_order("001");
        order.sla_breach_at = Some(now() - Duration::hours(1));

        let info = api.evaluate_order(&order, now());

        assert_eq!(info.score, 1000);
    }
}
