use crate::context::use_app;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    // 成功或失败都由控制器发通知；成功后路由服务监听认证状态自动跳转
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);
        app.login(
            username.get_untracked(),
            password.get_untracked(),
            move |_| set_is_submitting.set(false),
        );
    };

    let on_demo = move |_| app.demo_start(router);

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"SGCN-SGC"</h1>
                    <p class="text-base-content/70">
                        "Sistema de Gestión de Calidad y Continuidad del Negocio"
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Usuario"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Ingresando..." }.into_any()
                                } else {
                                    "Iniciar Sesión".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>

                <button class="btn btn-outline btn-secondary w-full" on:click=on_demo>
                    "Iniciar Demo para Directivos"
                </button>
            </div>
        </div>
    }
}
