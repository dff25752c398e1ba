use crate::context::{use_app, use_ui};
use crate::demo::DemoStep;
use crate::web::router::use_router;
use leptos::prelude::*;

/// 演示控制面板与讲解浮层
#[component]
pub fn DemoControls() -> impl IntoView {
    let app = use_app();
    let ui = use_ui();
    let router = use_router();

    let counter = move || {
        let driver = ui.demo.get();
        format!(
            "Paso {} de {}",
            driver.position().unwrap_or_default() + 1,
            driver.total()
        )
    };
    let current = move || ui.demo.get().current();

    view! {
        <Show when=move || ui.demo.get().is_active()>
            <div class="fixed top-4 right-4 z-50 card bg-base-100 shadow-2xl w-80">
                <div class="card-body p-5 gap-3">
                    <h3 class="card-title text-primary">"Demo SGCN-SGC"</h3>
                    <div>
                        <div class="text-sm opacity-70">{counter}</div>
                        <div class="font-semibold">{move || current().map(|s| s.title())}</div>
                        <div class="text-xs opacity-60">{move || current().map(|s| s.description())}</div>
                    </div>
                    <div class="flex gap-2">
                        <button
                            class="btn btn-sm"
                            disabled=move || !ui.demo.get().has_prev()
                            on:click=move |_| app.demo_prev(router)
                        >
                            "← Anterior"
                        </button>
                        <button
                            class="btn btn-sm btn-primary"
                            disabled=move || !ui.demo.get().has_next()
                            on:click=move |_| app.demo_next(router)
                        >
                            "Siguiente →"
                        </button>
                    </div>
                    <button class="btn btn-xs btn-error w-fit" on:click=move |_| app.demo_exit(router)>
                        "Salir Demo"
                    </button>
                </div>
            </div>
        </Show>

        {move || ui.overlay.get().map(|(_, step)| view! { <DemoOverlayPanel step=step /> })}
    }
}

#[component]
fn DemoOverlayPanel(step: DemoStep) -> impl IntoView {
    let ui = use_ui();
    let overlay = step.overlay();

    view! {
        <div class="fixed bottom-4 left-1/2 -translate-x-1/2 z-40 card bg-base-100 shadow-2xl max-w-xl">
            <div class="card-body p-5">
                <div class="flex justify-between items-start gap-4">
                    <div>
                        <h2 class="card-title text-primary">{step.title()}</h2>
                        <p class="opacity-70">{overlay.lead}</p>
                    </div>
                    <button class="btn btn-ghost btn-xs" on:click=move |_| ui.close_overlay()>"×"</button>
                </div>
                <div class="bg-base-200 rounded-box p-4">
                    <h4 class="font-semibold mb-2">{overlay.heading}</h4>
                    <ul class="list-disc pl-5 text-sm space-y-1">
                        {overlay.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
