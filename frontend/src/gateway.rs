//! 请求网关
//!
//! 所有需要认证的调用都经过 `ApiGateway::api_call`：
//! - 附加 `Authorization: Bearer <token>` 与 JSON Content-Type
//! - 401 时强制注销发出请求的会话
//! - 其余非 2xx 统一转换为带状态码的错误

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use sgcn_shared::{
    CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, LOGIN_PATH, ResourceCollection,
    UserProfile,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::request::{HttpClient, HttpMethod, HttpRequest};
use crate::session::SessionStore;
use crate::storage::KeyValueStore;

/// 调用方可定制的请求参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            headers: Vec::new(),
            body: Some(body.to_string()),
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }
}

pub struct ApiGateway<C, S> {
    client: C,
    session: Rc<SessionStore<S>>,
    api_base: String,
}

impl<C: HttpClient, S: KeyValueStore> ApiGateway<C, S> {
    pub fn new(client: C, session: Rc<SessionStore<S>>, config: &ClientConfig) -> Self {
        Self {
            client,
            session,
            api_base: config.api_base.clone(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// 绝对地址原样使用，否则拼接 API 基础路径
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.api_base, path)
        } else {
            format!("{}/{}", self.api_base, path)
        }
    }

    /// 登录（未认证请求）
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<UserProfile> {
        let url = self.url(LOGIN_PATH);
        self.session
            .login(&self.client, &url, username, password)
            .await
    }

    /// 发起认证请求并返回原始 JSON
    pub async fn api_call(&self, path: &str, options: RequestOptions) -> ClientResult<Value> {
        let Some(token) = self.session.token() else {
            // 没有会话时不发请求，按会话过期处理
            self.session.logout();
            return Err(ClientError::SessionExpired);
        };

        let url = self.url(path);
        let mut req = HttpRequest::new(&url, options.method)
            .with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token))
            .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON);

        for (key, value) in options.headers {
            if key.eq_ignore_ascii_case(HEADER_AUTHORIZATION)
                || key.eq_ignore_ascii_case(HEADER_CONTENT_TYPE)
            {
                log::warn!("[Gateway] Ignoring override of reserved header {}", key);
                continue;
            }
            req = req.with_header(&key, &value);
        }
        if let Some(body) = options.body {
            req = req.with_body(body);
        }

        let resp = self.client.send(req).await?;

        if resp.status == 401 {
            // 只注销发出请求时的那个会话，期间重新登录的会话保持不变
            if self.session.token().as_deref() == Some(token.as_str()) {
                log::warn!("[Gateway] 401 on {}, forcing logout", url);
                self.session.logout();
            } else {
                log::debug!("[Gateway] 401 on {} for a replaced session, ignoring", url);
            }
            return Err(ClientError::SessionExpired);
        }
        if !resp.ok() {
            return Err(ClientError::http(resp.status, resp.status_text));
        }

        if resp.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&resp.body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// GET 并反序列化为指定类型
    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let value = self.api_call(path, RequestOptions::get()).await?;
        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// 获取某类资源的完整列表
    pub async fn fetch_collection<T: ResourceCollection>(&self) -> ClientResult<Vec<T>> {
        self.fetch_json(T::PATH).await
    }
}

#[cfg(test)]
mod tests;
