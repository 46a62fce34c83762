// ==========================================
// API 层错误定义
// ==========================================

use thiserror::Error;

/// API 层统一错误类型
#[derive(Debug, Error)]
pub enum ApiError {
    /// 入参校验失败
    #[error("参数无效: {0}")]
    InvalidInput(String),

    /// 内部处理错误
    #[error("内部错误: {0}")]
    InternalError(String),

    /// 其他未分类错误
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// API 层统一结果别名
pub type ApiResult<T> = Result<T, ApiError>;
