// ==========================================
// API 层 - 对外门面
// ==========================================

pub mod error; // 统一错误类型
pub mod triage_api; // 分诊门面

pub use error::{ApiError, ApiResult};
pub use triage_api::{OrderListResponse, TriageApi, VendorOption, MAX_LIST_LIMIT};
