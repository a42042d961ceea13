// ==========================================
// 船舶正午报告控制台 - 应用层错误类型
// ==========================================

use thiserror::Error;

use crate::api::error::ApiError;
use crate::app::form::FormError;

/// 控制台错误
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("表单无效: {0}")]
    InvalidForm(#[from] FormError),

    #[error("当前没有进行中的矛盾会话")]
    NoActiveSession,

    #[error("终端读写失败: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 类型别名
pub type ConsoleResult<T> = Result<T, ConsoleError>;
