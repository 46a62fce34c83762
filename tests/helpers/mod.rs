// ==========================================
// 集成测试公共辅助
// ==========================================
// 职责: 提供统一的订单/告警测试夹具
// 用法: 各测试按需覆盖字段, 不在此处编码场景
// ==========================================

use chrono::{DateTime, Duration, TimeZone, Utc};
use order_triage::domain::order::{AdminAlert, Order};
use order_triage::domain::types::{AlertPriority, AlertType, OrderStatus, ProductType, RtoStatus};

/// 基准时刻: 2026-08-30 12:00:00 UTC
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
}

/// 创建测试用的订单（无任何风险条件）
pub fn create_test_order(id: &str) -> Order {
    let now = reference_now();
    Order {
        id: id.to_string(),
        order_number: format!("ORD-2026-{}", id),
        customer_name: "Ananya Iyer".to_string(),
        customer_email: "ananya@example.com".to_string(),
        product_name: "Birthday Cake".to_string(),
        product_type: ProductType::Regular,
        vendor_id: "v_10".to_string(),
        vendor_name: "Sweet Treats".to_string(),
        status: OrderStatus::Preparing,
        amount: 45.0,
        created_at: now - Duration::days(1),
        updated_at: now - Duration::hours(2),
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
        delivery_address: "7 Lake View".to_string(),
        admin_flags: Vec::new(),
        rto_status: RtoStatus::None,
        vendor_delay_minutes: None,
        customer_complaint: None,
        requires_admin_action: false,
        notes: None,
    }
}

/// 创建测试用的活跃告警
pub fn create_test_alert(alert_type: AlertType, priority: AlertPriority) -> AdminAlert {
    AdminAlert {
        alert_type,
        priority,
        message: "integration test".to_string(),
        created_at: reference_now() - Duration::hours(3),
        resolved_at: None,
    }
}
