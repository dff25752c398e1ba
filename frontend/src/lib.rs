//! SGCN-SGC 前端应用
//!
//! 核心与界面分离：
//! - `session` / `gateway` / `loader` / `render` / `demo`: 不依赖 DOM 的核心逻辑
//! - `app`: 组合核心的控制器，通过 `UiAdapter` 驱动界面
//! - `web::route` / `web::router`: 路由定义与路由服务
//! - `context` / `components`: Leptos 信号实现与 UI 组件层

pub mod app;
pub mod config;
pub mod demo;
pub mod error;
pub mod gateway;
pub mod loader;
pub mod module;
pub mod notify;
pub mod render;
pub mod request;
pub mod session;
pub mod storage;
pub mod ui;

mod context;
mod components {
    pub mod demo_controls;
    pub mod login;
    pub mod notifications;
    pub mod shell;
}

use crate::components::demo_controls::DemoControls;
use crate::components::login::LoginPage;
use crate::components::notifications::NotificationStack;
use crate::components::shell::AppShell;
use crate::config::ClientConfig;
use crate::context::{AppHandle, UiContext};

use leptos::prelude::*;

// 浏览器 API 封装模块
// 直接使用 web_sys 而不是 gloo-* 系列 crate，以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::FetchClient;
    pub use storage::BrowserStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Module(module) => view! { <AppShell module=module /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Página no encontrada"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建界面上下文与控制器
    let ui = UiContext::new();
    let app = AppHandle::new(ui, ClientConfig::default());
    provide_context(ui);
    provide_context(app);

    // 2. 恢复持久化会话（在路由服务初始化之前，使首次守卫看到正确状态）
    app.start();

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = ui.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
            <NotificationStack />
            <DemoControls />
        </Router>
    }
}
