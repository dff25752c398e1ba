//! 会话模块
//!
//! 持有认证 token 与用户信息，并同步到持久化存储。
//! token 与用户信息作为一个整体存在：内存中用 `Option<AuthSession>` 表示，
//! 持久化层出现只有一半的情况时在 `restore` 中整体清除。

use std::cell::RefCell;

use sgcn_shared::{
    CONTENT_TYPE_FORM, ErrorDetail, HEADER_CONTENT_TYPE, LoginForm, LoginResponse,
    STORAGE_TOKEN_KEY, STORAGE_USER_KEY, UserProfile,
};

use crate::error::{ClientError, ClientResult};
use crate::request::{HttpClient, HttpMethod, HttpRequest};
use crate::storage::KeyValueStore;

const DEFAULT_AUTH_ERROR: &str = "Error de autenticación";

/// 已认证会话
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

/// 会话存储
pub struct SessionStore<S> {
    storage: S,
    current: RefCell<Option<AuthSession>>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: RefCell::new(None),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.current.borrow().as_ref().map(|s| s.user.clone())
    }

    /// 启动时从持久化存储恢复会话
    ///
    /// 不校验 token 是否仍然有效，直到第一次 API 调用失败。
    pub fn restore(&self) -> Option<UserProfile> {
        let token = self.storage.get(STORAGE_TOKEN_KEY);
        let user = self
            .storage
            .get(STORAGE_USER_KEY)
            .and_then(|raw| serde_json::from_str::<Option<UserProfile>>(&raw).ok())
            .flatten();

        match (token, user) {
            (Some(token), Some(user)) if !token.is_empty() => {
                log::info!("[Session] Restored session for {}", user.full_name);
                *self.current.borrow_mut() = Some(AuthSession {
                    token,
                    user: user.clone(),
                });
                Some(user)
            }
            (token, user) => {
                if token.is_some() || user.is_some() {
                    log::warn!("[Session] Discarding incomplete persisted session");
                }
                self.clear();
                None
            }
        }
    }

    /// 提交表单凭据并在成功后建立会话
    pub async fn login<C: HttpClient>(
        &self,
        client: &C,
        url: &str,
        username: &str,
        password: &str,
    ) -> ClientResult<UserProfile> {
        let body = serde_urlencoded::to_string(LoginForm { username, password })
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        let req = HttpRequest::new(url, HttpMethod::Post)
            .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_FORM)
            .with_body(body);

        let resp = client.send(req).await?;

        if !resp.ok() {
            let detail = resp
                .json::<ErrorDetail>()
                .ok()
                .and_then(|d| d.detail)
                .unwrap_or_else(|| DEFAULT_AUTH_ERROR.to_string());
            log::info!("[Session] Login rejected with status {}", resp.status);
            return Err(ClientError::Authentication(detail));
        }

        let login = resp.json::<LoginResponse>()?;
        Ok(self.establish(login))
    }

    /// 保存登录结果（内存 + 持久化）
    pub fn establish(&self, login: LoginResponse) -> UserProfile {
        let LoginResponse {
            access_token, user, ..
        } = login;

        let persisted = self.storage.set(STORAGE_TOKEN_KEY, &access_token)
            && serde_json::to_string(&user)
                .map(|json| self.storage.set(STORAGE_USER_KEY, &json))
                .unwrap_or(false);
        if !persisted {
            log::warn!("[Session] Session could not be persisted, keeping it in memory only");
        }

        log::info!("[Session] Logged in as {} ({})", user.full_name, user.role);
        *self.current.borrow_mut() = Some(AuthSession {
            token: access_token,
            user: user.clone(),
        });
        user
    }

    /// 注销：清除内存与持久化状态
    ///
    /// 返回注销前是否存在会话。
    pub fn logout(&self) -> bool {
        let had_session = self.current.borrow().is_some();
        self.clear();
        if had_session {
            log::info!("[Session] Logged out");
        }
        had_session
    }

    fn clear(&self) {
        self.current.borrow_mut().take();
        self.storage.delete(STORAGE_TOKEN_KEY);
        self.storage.delete(STORAGE_USER_KEY);
    }
}

#[cfg(test)]
mod tests;
