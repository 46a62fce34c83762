// ==========================================
// 订单运营监控 - 优先级评分引擎
// ==========================================
// 红线: 评分是加法累积制, 规则之间相互独立
// 红线: 全函数 - 永不失败, 字段缺失即规则不适用
// ==========================================
// 职责: 订单原始状态 → 分数 + 层级 + 风险标签 + 命中原因
// 输入: Order + 显式 now（不读墙钟, 保证可测性）
// 输出: PriorityInfo（只读评估, 不回写订单）
// ==========================================

use crate::domain::order::Order;
use crate::domain::priority::{PriorityInfo, ScoredOrder};
use crate::domain::types::{AlertPriority, OrderStatus, PriorityLevel, ProductType};
use chrono::{DateTime, Duration, Utc};
use tracing::instrument;

// ==========================================
// 规则权重（整数, 固定常量, 不可配置）
// ==========================================
pub const SCORE_SLA_BREACH: u32 = 1000; // 规则1: 订单级 SLA 已违约
pub const SCORE_PREVIEW_OVERDUE: u32 = 800; // 规则2: 预览审批已超时
pub const SCORE_PREVIEW_AT_RISK: u32 = 300; // 规则3: 预览审批临近超时
pub const SCORE_FRESH_BASE: u32 = 500; // 规则4: 易腐生鲜基础分
pub const SCORE_FRESH_PACKING_BREACHED: u32 = 900; // 规则5: 生鲜打包已超时
pub const SCORE_FRESH_PACKING_AT_RISK: u32 = 400; // 规则6: 生鲜打包临近超时
pub const SCORE_FRESH_DELIVERY_URGENT: u32 = 600; // 规则7: 生鲜送达临近截止
pub const SCORE_DELIVERY_DELAY: u32 = 700; // 规则8: 派送滞留超24小时
pub const SCORE_RTO: u32 = 600; // 规则9: 逆向物流进行中
pub const SCORE_COMPLAINT: u32 = 500; // 规则10: 客户投诉未解决
pub const SCORE_PER_CRITICAL_ALERT: u32 = 400; // 规则11: 每条严重告警
pub const SCORE_PER_HIGH_ALERT: u32 = 200; // 规则12: 每条高优先级告警
pub const SCORE_VENDOR_DELAY: u32 = 250; // 规则13: 商家延迟超60分钟

// ==========================================
// 时间窗口（固定常量）
// ==========================================
pub const PREVIEW_RISK_WINDOW_MINS: i64 = 60; // 预览临近超时窗口
pub const FRESH_PACKING_WINDOW_MINS: i64 = 45; // 生鲜打包临近超时窗口
pub const FRESH_DELIVERY_WINDOW_HOURS: i64 = 2; // 生鲜送达临近窗口
pub const DELIVERY_STUCK_HOURS: i64 = 24; // 派送滞留阈值
pub const VENDOR_DELAY_THRESHOLD_MINS: i64 = 60; // 商家延迟阈值

// ==========================================
// 层级阈值（固定常量）
// ==========================================
pub const CRITICAL_SCORE_THRESHOLD: u32 = 800; // score >= 800 → critical
pub const AT_RISK_SCORE_THRESHOLD: u32 = 200; // score >= 200 → at-risk

// ==========================================
// PriorityEngine - 优先级评分引擎
// ==========================================
pub struct PriorityEngine {
    // 无状态引擎, 不需要注入依赖
}

impl PriorityEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 批量评估（推荐使用）
    ///
    /// 逐单独立评估, 返回已评分订单列表
    #[instrument(skip(self, orders), fields(count = orders.len()))]
    pub fn evaluate_batch(&self, orders: &[Order], now: DateTime<Utc>) -> Vec<ScoredOrder> {
        orders
            .iter()
            .map(|order| ScoredOrder {
                order: order.clone(),
                priority: self.evaluate(order, now),
            })
            .collect()
    }

    /// 单订单评估
    ///
    /// 规则按固定顺序评估, 分数加法累积, 每条命中规则推入标签与原因。
    /// 全函数: 任何输入都返回结果, 可选字段缺失只是跳过对应规则。
    pub fn evaluate(&self, order: &Order, now: DateTime<Utc>) -> PriorityInfo {
        let mut score: u32 = 0;
        let mut tags: Vec<String> = Vec::new();
        let mut reasons: Vec<String> = Vec::new();

        // 规则1: 订单级 SLA 已违约
        if let Some(breach_at) = order.sla_breach_at {
            if breach_at < now {
                score += SCORE_SLA_BREACH;
                tags.push("SLA Breach".to_string());
                reasons.push("SLA has been breached".to_string());
            }
        }

        // 规则2/3: 预览审批 SLA（互斥: 要么已超时, 要么临近超时）
        if order.status == OrderStatus::AwaitingApproval {
            if let Some(deadline) = order.preview_sla_deadline {
                let remaining = deadline.signed_duration_since(now);
                if remaining < Duration::zero() {
                    score += SCORE_PREVIEW_OVERDUE;
                    tags.push("Preview Overdue".to_string());
                    reasons.push("Preview SLA overdue".to_string());
                } else if remaining <= Duration::minutes(PREVIEW_RISK_WINDOW_MINS) {
                    score += SCORE_PREVIEW_AT_RISK;
                    tags.push("Preview At Risk".to_string());
                    reasons.push("Preview deadline within 1 hour".to_string());
                }
            }
        }

        // 规则4-7: 易腐生鲜规则组
        if order.product_type == ProductType::FreshPerishable {
            // 规则4: 基础分无条件累加
            tags.push("FRESH".to_string());
            score += SCORE_FRESH_BASE;

            // 规则5/6: 打包截止（互斥）
            if let Some(deadline) = order.packing_deadline {
                let remaining = deadline.signed_duration_since(now);
                if remaining < Duration::zero() {
                    score += SCORE_FRESH_PACKING_BREACHED;
                    tags.push("Fresh SLA Breached".to_string());
                    reasons.push("Fresh packing deadline breached".to_string());
                } else if remaining <= Duration::minutes(FRESH_PACKING_WINDOW_MINS) {
                    score += SCORE_FRESH_PACKING_AT_RISK;
                    tags.push("Fresh High Risk".to_string());
                    reasons.push("Fresh packing deadline within 45 mins".to_string());
                }
            }

            // 规则7: 送达截止, 独立于规则5/6, 可叠加
            if let Some(required_by) = order.required_delivery_by {
                let remaining = required_by.signed_duration_since(now);
                if remaining <= Duration::hours(FRESH_DELIVERY_WINDOW_HOURS) {
                    score += SCORE_FRESH_DELIVERY_URGENT;
                    tags.push("Fresh Delivery Urgent".to_string());
                    reasons.push("Fresh delivery within 2 hours".to_string());
                }
            }
        }

        // 规则8: 派送滞留
        if order.status == OrderStatus::OutForDelivery {
            if let Some(since) = order.out_for_delivery_since {
                if now.signed_duration_since(since) > Duration::hours(DELIVERY_STUCK_HOURS) {
                    score += SCORE_DELIVERY_DELAY;
                    tags.push("Delivery Delay".to_string());
                    reasons.push("Stuck in delivery for over 24 hours".to_string());
                }
            }
        }

        // 规则9: 逆向物流
        if order.rto_status.is_active() {
            score += SCORE_RTO;
            tags.push("RTO Initiated".to_string());
            reasons.push("Return to origin initiated".to_string());
        }

        // 规则10: 客户投诉
        if let Some(complaint) = &order.customer_complaint {
            if !complaint.resolved {
                score += SCORE_COMPLAINT;
                tags.push("Complaint Raised".to_string());
                reasons.push("Customer complaint pending resolution".to_string());
            }
        }

        // 规则11: 严重告警（按条数累加）
        let critical_count = order.count_active_alerts_with_priority(AlertPriority::Critical);
        if critical_count > 0 {
            score += SCORE_PER_CRITICAL_ALERT * critical_count as u32;
            tags.push(format!("Critical Alerts ({})", critical_count));
            reasons.push(format!("{} critical alert(s)", critical_count));
        }

        // 规则12: 高优先级告警（按条数累加）
        // 已有严重告警标签时抑制本标签, 但分数与原因照常累加。
        // 上游实现用整串匹配 'Critical Alerts' 判断, 永远匹配不到
        // 'Critical Alerts (C)', 抑制从未生效; 此处按前缀匹配修正。
        let high_count = order.count_active_alerts_with_priority(AlertPriority::High);
        if high_count > 0 {
            score += SCORE_PER_HIGH_ALERT * high_count as u32;
            if !tags.iter().any(|t| t.starts_with("Critical Alerts")) {
                tags.push(format!("High Priority Alerts ({})", high_count));
            }
            reasons.push(format!("{} high priority alert(s)", high_count));
        }

        // 规则13: 商家延迟
        if let Some(delay_mins) = order.vendor_delay_minutes {
            if delay_mins > VENDOR_DELAY_THRESHOLD_MINS {
                score += SCORE_VENDOR_DELAY;
                tags.push("Vendor Delay".to_string());
                reasons.push(format!("Vendor delayed by {}h", delay_mins / 60));
            }
        }

        PriorityInfo {
            level: Self::classify(score),
            score,
            tags: Self::dedup_tags(tags),
            reasons,
        }
    }

    // ==========================================
    // 层级映射
    // ==========================================

    /// 分数 → 层级的确定性映射
    pub fn classify(score: u32) -> PriorityLevel {
        if score >= CRITICAL_SCORE_THRESHOLD {
            PriorityLevel::Critical
        } else if score >= AT_RISK_SCORE_THRESHOLD {
            PriorityLevel::AtRisk
        } else {
            PriorityLevel::Healthy
        }
    }

    /// 标签去重, 保留首次插入顺序
    fn dedup_tags(tags: Vec<String>) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        tags.into_iter().filter(|t| seen.insert(t.clone())).collect()
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for PriorityEngine {
    fn default() -> Self {
        Self::new()
    }
}
