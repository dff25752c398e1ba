//! 界面上下文
//!
//! `UiContext` 用信号实现 `UiAdapter`，组件只读取这些信号。
//! `AppHandle` 把控制器放进 Leptos 的 arena，使组件闭包可以 Copy 地持有它。

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use sgcn_shared::UserProfile;

use crate::app::AppController;
use crate::config::ClientConfig;
use crate::demo::{self, DemoDriver, DemoHost, DemoStep};
use crate::module::ModuleKind;
use crate::notify::{NotificationCenter, NotificationKind};
use crate::render::Markup;
use crate::ui::UiAdapter;
use crate::web::router::RouterService;
use crate::web::{BrowserStorage, FetchClient};

// =========================================================
// UiContext
// =========================================================

#[derive(Clone, Copy)]
pub struct UiContext {
    pub authenticated: RwSignal<bool>,
    pub user: RwSignal<Option<UserProfile>>,
    /// 当前显示的模块，决定显示仪表盘区域还是通用内容区域
    pub active: RwSignal<ModuleKind>,
    pub dashboard: RwSignal<String>,
    pub content: RwSignal<String>,
    pub notifications: RwSignal<NotificationCenter>,
    /// (序号, 步骤)，序号用于定时器只关闭自己打开的浮层
    pub overlay: RwSignal<Option<(u64, DemoStep)>>,
    overlay_seq: StoredValue<u64>,
    pub demo: RwSignal<DemoDriver>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            authenticated: RwSignal::new(false),
            user: RwSignal::new(None),
            active: RwSignal::new(ModuleKind::Dashboard),
            dashboard: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            notifications: RwSignal::new(NotificationCenter::new()),
            overlay: RwSignal::new(None),
            overlay_seq: StoredValue::new(0),
            demo: RwSignal::new(DemoDriver::new()),
        }
    }

    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let authenticated = self.authenticated;
        Signal::derive(move || authenticated.get())
    }

    pub fn dismiss(&self, id: u64) {
        self.notifications.update(|center| {
            center.dismiss(id);
        });
    }

    pub fn close_overlay(&self) {
        self.overlay.set(None);
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

impl UiAdapter for UiContext {
    fn show_login(&self) {
        self.user.set(None);
        self.authenticated.set(false);
    }

    fn show_app(&self, user: &UserProfile) {
        self.user.set(Some(user.clone()));
        self.authenticated.set(true);
    }

    fn show_dashboard(&self, markup: Markup) {
        self.dashboard.set(markup.into_string());
        self.active.set(ModuleKind::Dashboard);
    }

    fn show_module(&self, module: ModuleKind, markup: Markup) {
        self.content.set(markup.into_string());
        self.active.set(module);
    }

    fn notify(&self, kind: NotificationKind, message: &str, duration: Duration) {
        let mut id = 0;
        self.notifications
            .update(|center| id = center.push(kind, message, duration));

        // 手动关闭后定时器触发是空操作
        let notifications = self.notifications;
        set_timeout(
            move || {
                notifications.update(|center| {
                    center.dismiss(id);
                });
            },
            duration,
        );
    }

    fn show_overlay(&self, step: DemoStep, duration: Duration) {
        let seq = self.overlay_seq.get_value() + 1;
        self.overlay_seq.set_value(seq);
        self.overlay.set(Some((seq, step)));

        let overlay = self.overlay;
        set_timeout(
            move || {
                overlay.update(|current| {
                    if matches!(current, Some((s, _)) if *s == seq) {
                        *current = None;
                    }
                });
            },
            duration,
        );
    }
}

// =========================================================
// AppHandle
// =========================================================

pub type WebController = AppController<FetchClient, BrowserStorage, UiContext>;

/// 控制器句柄
#[derive(Clone, Copy)]
pub struct AppHandle(StoredValue<Rc<WebController>, LocalStorage>);

impl AppHandle {
    pub fn new(ui: UiContext, config: ClientConfig) -> Self {
        let controller = AppController::new(FetchClient, BrowserStorage, ui, config);
        Self(StoredValue::new_local(Rc::new(controller)))
    }

    fn controller(&self) -> Option<Rc<WebController>> {
        self.0.try_get_value()
    }

    pub fn start(&self) -> bool {
        self.controller().is_some_and(|app| app.start())
    }

    pub fn login(&self, username: String, password: String, done: impl FnOnce(bool) + 'static) {
        let Some(app) = self.controller() else {
            return;
        };
        spawn_local(async move {
            let ok = app.login(&username, &password).await;
            done(ok);
        });
    }

    pub fn logout(&self) {
        if let Some(app) = self.controller() {
            app.logout();
        }
    }

    pub fn open_module(&self, module: ModuleKind) {
        let Some(app) = self.controller() else {
            return;
        };
        spawn_local(async move {
            app.open_module(module).await;
        });
    }

    pub fn handle_action(&self, raw: &str) {
        if let Some(app) = self.controller() {
            app.handle_action(raw);
        }
    }

    // =====================================================
    // 演示模式
    // =====================================================

    pub fn demo_start(&self, router: RouterService) {
        let Some(ui) = self.ui() else { return };
        let mut step = None;
        ui.demo.update(|driver| step = Some(driver.start()));
        if let Some(step) = step {
            self.run_demo_step(step, router);
        }
    }

    pub fn demo_next(&self, router: RouterService) {
        self.demo_move(router, DemoDriver::next);
    }

    pub fn demo_prev(&self, router: RouterService) {
        self.demo_move(router, DemoDriver::prev);
    }

    pub fn demo_exit(&self, router: RouterService) {
        let Some(app) = self.controller() else {
            return;
        };
        let ui = *app.ui();
        let mut was_active = false;
        ui.demo.update(|driver| was_active = driver.exit());
        ui.close_overlay();
        if was_active {
            let host = RoutedDemoHost { app, router };
            spawn_local(async move {
                demo::leave(&host).await;
            });
        }
    }

    fn demo_move(&self, router: RouterService, step_fn: fn(&mut DemoDriver) -> Option<DemoStep>) {
        let Some(ui) = self.ui() else { return };
        let mut step = None;
        ui.demo.update(|driver| step = step_fn(driver));
        if let Some(step) = step {
            self.run_demo_step(step, router);
        }
    }

    fn run_demo_step(&self, step: DemoStep, router: RouterService) {
        let Some(app) = self.controller() else {
            return;
        };
        let host = RoutedDemoHost { app, router };
        spawn_local(async move {
            let config = host.app.config().demo.clone();
            demo::run_step(step, &host, &config).await;
        });
    }

    fn ui(&self) -> Option<UiContext> {
        self.controller().map(|app| *app.ui())
    }
}

pub fn use_app() -> AppHandle {
    use_context::<AppHandle>().expect("AppHandle should be provided")
}

pub fn use_ui() -> UiContext {
    use_context::<UiContext>().expect("UiContext should be provided")
}

// =========================================================
// RoutedDemoHost
// =========================================================

/// 演示宿主：模块切换走路由，由页面挂载时加载数据
struct RoutedDemoHost {
    app: Rc<WebController>,
    router: RouterService,
}

#[async_trait::async_trait(?Send)]
impl DemoHost for RoutedDemoHost {
    fn is_authenticated(&self) -> bool {
        self.app.session().is_authenticated()
    }

    fn show_login(&self) {
        self.app.ui().show_login();
        self.router.navigate("/");
    }

    async fn login(&self, username: &str, password: &str) -> bool {
        self.app.auto_login(username, password).await
    }

    async fn open(&self, module: ModuleKind) {
        self.router.navigate(module.path());
    }

    fn overlay(&self, step: DemoStep, duration: Duration) {
        self.app.ui().show_overlay(step, duration);
    }
}
