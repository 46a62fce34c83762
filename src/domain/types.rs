// ==========================================
// 订单运营监控 - 领域类型定义
// ==========================================
// 红线: 枚举序列化字符串与上游数据源完全一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 订单状态 (Order Status)
// ==========================================
// 生命周期: Order Placed → ... → Delivered, Cancelled 为终态侧分支
// Customizing/Awaiting Approval 仅在 preview_enabled 时出现
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Order Placed")]
    OrderPlaced, // 新订单
    #[serde(rename = "Customizing")]
    Customizing, // 定制中
    #[serde(rename = "Awaiting Approval")]
    AwaitingApproval, // 等待预览审批
    #[serde(rename = "Preparing")]
    Preparing, // 备货中
    #[serde(rename = "Packed")]
    Packed, // 已打包
    #[serde(rename = "Ready for Pickup")]
    ReadyForPickup, // 待揽收
    #[serde(rename = "Out for Delivery")]
    OutForDelivery, // 派送中
    #[serde(rename = "Delivered")]
    Delivered, // 已送达
    #[serde(rename = "Cancelled")]
    Cancelled, // 已取消
}

impl OrderStatus {
    /// 全量状态列表（状态计数时保证零计数状态也出现）
    pub const ALL: [OrderStatus; 9] = [
        OrderStatus::OrderPlaced,
        OrderStatus::Customizing,
        OrderStatus::AwaitingApproval,
        OrderStatus::Preparing,
        OrderStatus::Packed,
        OrderStatus::ReadyForPickup,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::OrderPlaced => write!(f, "Order Placed"),
            OrderStatus::Customizing => write!(f, "Customizing"),
            OrderStatus::AwaitingApproval => write!(f, "Awaiting Approval"),
            OrderStatus::Preparing => write!(f, "Preparing"),
            OrderStatus::Packed => write!(f, "Packed"),
            OrderStatus::ReadyForPickup => write!(f, "Ready for Pickup"),
            OrderStatus::OutForDelivery => write!(f, "Out for Delivery"),
            OrderStatus::Delivered => write!(f, "Delivered"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

// ==========================================
// 商品类型 (Product Type)
// ==========================================
// 易腐属性改变紧急度规则（Fresh Perishable 有独立规则组）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "Regular")]
    Regular, // 普通商品
    #[serde(rename = "Packaged Perishable")]
    PackagedPerishable, // 包装生鲜
    #[serde(rename = "Fresh Perishable")]
    FreshPerishable, // 易腐生鲜
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductType::Regular => write!(f, "Regular"),
            ProductType::PackagedPerishable => write!(f, "Packaged Perishable"),
            ProductType::FreshPerishable => write!(f, "Fresh Perishable"),
        }
    }
}

// ==========================================
// 告警优先级 (Alert Priority)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Critical, // 严重
    High,     // 高
    Medium,   // 中
    Low,      // 低
}

impl fmt::Display for AlertPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertPriority::Critical => write!(f, "critical"),
            AlertPriority::High => write!(f, "high"),
            AlertPriority::Medium => write!(f, "medium"),
            AlertPriority::Low => write!(f, "low"),
        }
    }
}

// ==========================================
// 告警类型 (Alert Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    SlaBreach,         // SLA 违约
    PreviewDispute,    // 预览争议
    DeliveryFailure,   // 配送失败
    VendorDelay,       // 商家延迟
    CustomerComplaint, // 客户投诉
    FraudFlag,         // 欺诈标记
    PayoutIssue,       // 结算问题
    ComplianceIssue,   // 合规问题
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertType::SlaBreach => write!(f, "sla_breach"),
            AlertType::PreviewDispute => write!(f, "preview_dispute"),
            AlertType::DeliveryFailure => write!(f, "delivery_failure"),
            AlertType::VendorDelay => write!(f, "vendor_delay"),
            AlertType::CustomerComplaint => write!(f, "customer_complaint"),
            AlertType::FraudFlag => write!(f, "fraud_flag"),
            AlertType::PayoutIssue => write!(f, "payout_issue"),
            AlertType::ComplianceIssue => write!(f, "compliance_issue"),
        }
    }
}

// ==========================================
// 逆向物流状态 (RTO Status)
// ==========================================
// RTO = Return To Origin, 配送失败后的退回流程
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RtoStatus {
    #[default]
    None, // 无退回
    Initiated,         // 已发起
    InTransit,         // 退回途中
    DeliveredToVendor, // 已退回商家
}

impl RtoStatus {
    /// 是否处于退回流程中
    pub fn is_active(&self) -> bool {
        *self != RtoStatus::None
    }
}

impl fmt::Display for RtoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RtoStatus::None => write!(f, "none"),
            RtoStatus::Initiated => write!(f, "initiated"),
            RtoStatus::InTransit => write!(f, "in_transit"),
            RtoStatus::DeliveredToVendor => write!(f, "delivered_to_vendor"),
        }
    }
}

// ==========================================
// 优先级层级 (Priority Level)
// ==========================================
// 由数值分数确定性映射: >=800 critical, >=200 at-risk, 其余 healthy
// 顺序: Healthy < AtRisk < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityLevel {
    #[serde(rename = "healthy")]
    Healthy, // 健康
    #[serde(rename = "at-risk")]
    AtRisk, // 有风险
    #[serde(rename = "critical")]
    Critical, // 危急
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityLevel::Healthy => write!(f, "healthy"),
            PriorityLevel::AtRisk => write!(f, "at-risk"),
            PriorityLevel::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 风险筛选预设 (Risk Filter Preset)
// ==========================================
// 同一时刻最多一个预设生效, 切换即替换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskPreset {
    Critical,         // 仅危急订单
    DeliveryFailures, // 配送异常
    AwaitingPreview,  // 等待预览审批
    FreshOnly,        // 仅生鲜未送达
}

impl RiskPreset {
    /// 从字符串解析预设
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "critical" => Some(RiskPreset::Critical),
            "delivery_failures" => Some(RiskPreset::DeliveryFailures),
            "awaiting_preview" => Some(RiskPreset::AwaitingPreview),
            "fresh_only" => Some(RiskPreset::FreshOnly),
            _ => None,
        }
    }
}

impl fmt::Display for RiskPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskPreset::Critical => write!(f, "critical"),
            RiskPreset::DeliveryFailures => write!(f, "delivery_failures"),
            RiskPreset::AwaitingPreview => write!(f, "awaiting_preview"),
            RiskPreset::FreshOnly => write!(f, "fresh_only"),
        }
    }
}
