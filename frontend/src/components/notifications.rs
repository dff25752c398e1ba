use crate::context::use_ui;
use crate::notify::Notification;
use leptos::prelude::*;

/// 通知横幅堆栈
///
/// 自动移除由 `UiContext::notify` 的定时器负责，这里只提供手动关闭。
#[component]
pub fn NotificationStack() -> impl IntoView {
    let ui = use_ui();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || ui.notifications.get().items().to_vec()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=format!("alert alert-{} shadow-lg", n.kind.as_str())>
                            <span>{n.message}</span>
                            <button class="btn btn-ghost btn-xs" on:click=move |_| ui.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
