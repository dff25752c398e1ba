//! 应用控制器
//!
//! 组合会话、网关、模块加载器与 UI 适配器，是外壳调用核心的唯一入口。
//! 所有失败都在这里被捕获并转换为通知，不再向上传播。

use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::ClientConfig;
use crate::demo::{DemoHost, DemoStep};
use crate::error::ClientError;
use crate::gateway::ApiGateway;
use crate::loader::{ModuleLoader, NavigationOutcome};
use crate::module::ModuleKind;
use crate::notify::NotificationKind;
use crate::render::actions::PlaceholderAction;
use crate::request::HttpClient;
use crate::session::SessionStore;
use crate::storage::KeyValueStore;
use crate::ui::UiAdapter;

pub struct AppController<C, S, U> {
    session: Rc<SessionStore<S>>,
    loader: ModuleLoader<C, S>,
    ui: U,
    config: ClientConfig,
}

impl<C: HttpClient, S: KeyValueStore, U: UiAdapter> AppController<C, S, U> {
    pub fn new(client: C, storage: S, ui: U, config: ClientConfig) -> Self {
        let session = Rc::new(SessionStore::new(storage));
        let gateway = Rc::new(ApiGateway::new(client, session.clone(), &config));
        Self {
            session,
            loader: ModuleLoader::new(gateway),
            ui,
            config,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.loader = self.loader.with_clock(clock);
        self
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn loader(&self) -> &ModuleLoader<C, S> {
        &self.loader
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 启动：恢复持久化会话，返回是否已认证
    pub fn start(&self) -> bool {
        match self.session.restore() {
            Some(user) => {
                self.ui.show_app(&user);
                true
            }
            None => {
                self.ui.show_login();
                false
            }
        }
    }

    /// 登录，返回是否成功
    pub async fn login(&self, username: &str, password: &str) -> bool {
        self.authenticate(username, password, true).await
    }

    /// 演示模式的自动登录：成功时不弹出通知，避免盖住讲解浮层
    pub async fn auto_login(&self, username: &str, password: &str) -> bool {
        self.authenticate(username, password, false).await
    }

    async fn authenticate(&self, username: &str, password: &str, announce: bool) -> bool {
        match self.loader.gateway().login(username, password).await {
            Ok(user) => {
                if announce {
                    self.notify(NotificationKind::Success, "Login exitoso");
                }
                self.ui.show_app(&user);
                true
            }
            Err(e) => {
                log::warn!("[Session] Login failed: {}", e);
                self.notify(NotificationKind::Error, &e.user_message());
                false
            }
        }
    }

    pub fn logout(&self) {
        self.session.logout();
        self.ui.show_login();
        self.notify(NotificationKind::Info, "Sesión cerrada");
    }

    /// 打开模块；会话过期时回到登录视图
    pub async fn open_module(&self, module: ModuleKind) -> NavigationOutcome {
        let outcome = self.loader.navigate(module, &self.ui).await;
        if let NavigationOutcome::Failed(ClientError::SessionExpired) = outcome {
            self.logout();
        }
        outcome
    }

    /// 处理占位按钮的 `data-action`，返回是否识别
    pub fn handle_action(&self, raw: &str) -> bool {
        match PlaceholderAction::parse(raw) {
            Some(action) => {
                self.notify(NotificationKind::Info, &action.message());
                true
            }
            None => {
                log::debug!("[App] Unknown action {}", raw);
                false
            }
        }
    }

    fn notify(&self, kind: NotificationKind, message: &str) {
        self.ui
            .notify(kind, message, self.config.notification_duration);
    }
}

#[async_trait::async_trait(?Send)]
impl<C: HttpClient, S: KeyValueStore, U: UiAdapter> DemoHost for AppController<C, S, U> {
    fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn show_login(&self) {
        self.ui.show_login();
    }

    async fn login(&self, username: &str, password: &str) -> bool {
        self.auto_login(username, password).await
    }

    async fn open(&self, module: ModuleKind) {
        self.open_module(module).await;
    }

    fn overlay(&self, step: DemoStep, duration: Duration) {
        self.ui.show_overlay(step, duration);
    }
}
