// ==========================================
// 订单运营监控 - 订单领域模型
// ==========================================
// 红线: 订单由外部数据源拥有, 核心只读不写
// 用途: 数据源写入, 引擎层只读
// ==========================================

use crate::domain::types::{AlertPriority, AlertType, OrderStatus, ProductType, RtoStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Order - 订单主数据
// ==========================================
// 可选字段缺失表示"对应规则不适用", 不是错误
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    // ===== 标识 =====
    pub id: String,           // 订单唯一标识
    pub order_number: String, // 订单号（数据集内唯一）

    // ===== 客户与商品 =====
    pub customer_name: String,     // 客户姓名
    pub customer_email: String,    // 客户邮箱
    pub product_name: String,      // 商品名称
    pub product_type: ProductType, // 商品类型（易腐属性）

    // ===== 商家 =====
    pub vendor_id: String,   // 商家标识（筛选用）
    pub vendor_name: String, // 商家名称

    // ===== 状态与金额 =====
    pub status: OrderStatus, // 订单生命周期状态
    pub amount: f64,         // 订单金额

    // ===== 审计时间 =====
    pub created_at: DateTime<Utc>, // 下单时间
    pub updated_at: DateTime<Utc>, // 最后更新时间（排序次键）

    // ===== 预览定制 =====
    #[serde(default)]
    pub preview_enabled: bool, // 是否定制商品（决定 Customizing/Awaiting Approval 是否出现）
    #[serde(default)]
    pub preview_url: Option<String>, // 预览件地址
    #[serde(default)]
    pub preview_uploaded_at: Option<DateTime<Utc>>, // 预览件上传时间
    #[serde(default)]
    pub preview_approved_at: Option<DateTime<Utc>>, // 预览审批通过时间
    #[serde(default)]
    pub preview_declined_at: Option<DateTime<Utc>>, // 预览拒绝时间
    #[serde(default)]
    pub preview_sla_deadline: Option<DateTime<Utc>>, // 预览审批 SLA 截止

    // ===== SLA 与时限（缺失即规则不适用）=====
    #[serde(default)]
    pub sla_breach_at: Option<DateTime<Utc>>, // 订单级 SLA 违约时刻
    #[serde(default)]
    pub packing_deadline: Option<DateTime<Utc>>, // 生鲜打包截止
    #[serde(default)]
    pub required_delivery_by: Option<DateTime<Utc>>, // 生鲜送达截止
    #[serde(default)]
    pub out_for_delivery_since: Option<DateTime<Utc>>, // 开始派送时刻

    // ===== 配送 =====
    #[serde(default)]
    pub tracking_number: Option<String>, // 物流单号
    pub delivery_address: String, // 收货地址

    // ===== 运营标注 =====
    #[serde(default)]
    pub admin_flags: Vec<AdminAlert>, // 管理告警（active = 未解决）
    #[serde(default)]
    pub rto_status: RtoStatus, // 逆向物流状态
    #[serde(default)]
    pub vendor_delay_minutes: Option<i64>, // 商家延迟（分钟）
    #[serde(default)]
    pub customer_complaint: Option<CustomerComplaint>, // 客户投诉
    #[serde(default)]
    pub requires_admin_action: bool, // 需要人工处理标志

    #[serde(default)]
    pub notes: Option<String>, // 备注
}

impl Order {
    /// 未解决的告警列表
    pub fn active_alerts(&self) -> impl Iterator<Item = &AdminAlert> {
        self.admin_flags.iter().filter(|f| f.is_active())
    }

    /// 是否存在指定类型的未解决告警
    pub fn has_active_alert_of_type(&self, alert_type: AlertType) -> bool {
        self.active_alerts().any(|f| f.alert_type == alert_type)
    }

    /// 是否存在指定优先级的未解决告警
    pub fn has_active_alert_with_priority(&self, priority: AlertPriority) -> bool {
        self.active_alerts().any(|f| f.priority == priority)
    }

    /// 指定优先级的未解决告警数量
    pub fn count_active_alerts_with_priority(&self, priority: AlertPriority) -> usize {
        self.active_alerts().filter(|f| f.priority == priority).count()
    }

    /// 自由文本检索: 订单号/客户/商品/商家, 大小写不敏感子串匹配
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.order_number.to_lowercase().contains(&query)
            || self.customer_name.to_lowercase().contains(&query)
            || self.product_name.to_lowercase().contains(&query)
            || self.vendor_name.to_lowercase().contains(&query)
    }
}

// ==========================================
// AdminAlert - 管理告警
// ==========================================
// 带类型/优先级/时间戳的运营问题标注, resolved_at 缺失即生效中
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAlert {
    #[serde(rename = "type")]
    pub alert_type: AlertType, // 告警类型
    pub priority: AlertPriority,   // 告警优先级
    pub message: String,           // 告警描述
    pub created_at: DateTime<Utc>, // 创建时间
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>, // 解决时间（None = 生效中）
}

impl AdminAlert {
    /// 告警是否仍然生效
    pub fn is_active(&self) -> bool {
        self.resolved_at.is_none()
    }
}

// ==========================================
// CustomerComplaint - 客户投诉
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerComplaint {
    pub reason: String,              // 投诉原因
    pub submitted_at: DateTime<Utc>, // 提交时间
    #[serde(default)]
    pub resolved: bool, // 是否已解决（缺失视为未解决）
}
