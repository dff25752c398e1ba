use std::fmt;

use crate::request::HttpError;

// =========================================================
// 客户端错误
// =========================================================

/// 客户端错误分类
///
/// 所有错误都在发起操作的边界（登录处理、模块加载）被捕获，
/// 转换为通知或内联错误面板，不会继续向上传播。
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// 凭据错误，消息来自后端 `detail` 或默认文案
    Authentication(String),
    /// 任意认证请求返回 401
    SessionExpired,
    /// 网络层失败
    Connectivity(String),
    /// 非 2xx、非 401 的响应
    Http { status: u16, status_text: String },
    /// 响应体无法解析
    Decode(String),
}

impl ClientError {
    pub fn http(status: u16, status_text: impl Into<String>) -> Self {
        Self::Http {
            status,
            status_text: status_text.into(),
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// 面向用户的提示文案
    pub fn user_message(&self) -> String {
        match self {
            Self::Authentication(msg) => msg.clone(),
            Self::SessionExpired => "No autorizado".to_string(),
            Self::Connectivity(_) => "Error de conexión".to_string(),
            Self::Http {
                status,
                status_text,
            } => format!("Error {}: {}", status, status_text),
            Self::Decode(_) => "Respuesta inválida del servidor".to_string(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentication(msg) => write!(f, "authentication failed: {}", msg),
            Self::SessionExpired => write!(f, "session expired (401)"),
            Self::Connectivity(detail) => write!(f, "connectivity error: {}", detail),
            Self::Http {
                status,
                status_text,
            } => write!(f, "Error {}: {}", status, status_text),
            Self::Decode(detail) => write!(f, "decode error: {}", detail),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<HttpError> for ClientError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::ResponseParseFailed(msg) => Self::Decode(msg),
            other => Self::Connectivity(other.to_string()),
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_carries_status() {
        let err = ClientError::http(500, "Internal Server Error");
        assert_eq!(err.user_message(), "Error 500: Internal Server Error");
        assert_eq!(err.to_string(), "Error 500: Internal Server Error");
    }

    #[test]
    fn test_transport_errors_map_to_connectivity() {
        let err: ClientError = HttpError::NetworkError("offline".into()).into();
        assert_eq!(err, ClientError::Connectivity("网络错误: offline".into()));
        assert_eq!(err.user_message(), "Error de conexión");

        let err: ClientError = HttpError::ResponseParseFailed("bad".into()).into();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
