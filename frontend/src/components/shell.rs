use crate::context::{use_app, use_ui};
use crate::module::ModuleKind;
use crate::web::router::Link;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// 取出点击位置所在占位按钮的 `data-action`
fn clicked_action(ev: &web_sys::MouseEvent) -> Option<String> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    target
        .closest("[data-action]")
        .ok()??
        .get_attribute("data-action")
}

/// 已认证的应用外壳
///
/// 每次进入模块路由都会重新挂载，挂载时加载该模块。
#[component]
pub fn AppShell(module: ModuleKind) -> impl IntoView {
    let app = use_app();
    let ui = use_ui();

    app.open_module(module);

    let on_logout = move |_| app.logout();

    // 模块内容是 HTML 字符串，占位按钮统一在容器上代理处理
    let on_content_click = move |ev: web_sys::MouseEvent| {
        if let Some(raw) = clicked_action(&ev) {
            app.handle_action(&raw);
        }
    };

    let user_name = move || ui.user.get().map(|u| u.full_name).unwrap_or_default();
    let user_role = move || ui.user.get().map(|u| u.role).unwrap_or_default();

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <div class="navbar bg-base-100 shadow-xl px-4">
                <div class="flex-1 gap-2">
                    <span class="text-xl font-bold">"SGCN-SGC"</span>
                    <span class="badge badge-neutral hidden md:inline-flex">{module.label()}</span>
                </div>
                <div class="flex-none gap-4">
                    <div class="text-right">
                        <div class="font-semibold">{user_name}</div>
                        <div class="text-xs opacity-70">{user_role}</div>
                    </div>
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm">
                        "Cerrar Sesión"
                    </button>
                </div>
            </div>

            <div class="flex">
                <ul class="menu bg-base-100 w-56 min-h-screen">
                    {ModuleKind::ALL
                        .into_iter()
                        .map(|item| {
                            let class = if item == module { "active" } else { "" };
                            view! {
                                <li>
                                    <Link to=item.path() class=class.to_string()>
                                        {item.label()}
                                    </Link>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <main class="flex-1 p-4 md:p-8 space-y-8" on:click=on_content_click>
                    <Show
                        when=move || ui.active.get() == ModuleKind::Dashboard
                        fallback=move || view! {
                            <div id="moduleContent" inner_html=move || ui.content.get()></div>
                        }
                    >
                        <div id="dashboardContent" inner_html=move || ui.dashboard.get()></div>
                    </Show>
                </main>
            </div>
        </div>
    }
}
