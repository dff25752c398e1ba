//! 模块加载器
//!
//! 每次导航领取一个新的请求代号 (generation)。请求完成时若代号已不是最新，
//! 结果直接丢弃，所以无论网络完成顺序如何，最后一次导航总是胜出。

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use sgcn_shared::{
    Audit, ContinuityPlan, DASHBOARD_STATS_PATH, DashboardStats, Document, Incident, Kpi,
    NonConformity, Simulation,
};

use crate::error::{ClientError, ClientResult};
use crate::gateway::ApiGateway;
use crate::module::ModuleKind;
use crate::render::{self, Markup};
use crate::request::HttpClient;
use crate::storage::KeyValueStore;
use crate::ui::UiAdapter;

/// 一次导航的结果
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    /// 内容已渲染
    Rendered,
    /// 期间发生了更新的导航或会话已更换，结果被丢弃
    Superseded,
    /// 加载失败（内容区已显示错误面板，会话过期除外）
    Failed(ClientError),
}

pub struct ModuleLoader<C, S> {
    gateway: Rc<ApiGateway<C, S>>,
    generation: Cell<u64>,
    current: Cell<ModuleKind>,
    clock: fn() -> DateTime<Utc>,
}

impl<C: HttpClient, S: KeyValueStore> ModuleLoader<C, S> {
    pub fn new(gateway: Rc<ApiGateway<C, S>>) -> Self {
        Self {
            gateway,
            generation: Cell::new(0),
            current: Cell::new(ModuleKind::Dashboard),
            clock: Utc::now,
        }
    }

    /// 替换时间源（测试中固定"现在"）
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn gateway(&self) -> &ApiGateway<C, S> {
        &self.gateway
    }

    /// 最近一次导航的目标模块
    pub fn current(&self) -> ModuleKind {
        self.current.get()
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// 进入模块：显示加载占位，获取数据，渲染
    pub async fn navigate<U: UiAdapter>(&self, module: ModuleKind, ui: &U) -> NavigationOutcome {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.current.set(module);
        log::info!("[Loader] Entering {} (generation {})", module, generation);

        show_region(ui, module, render::loading());
        let result = self.load(module).await;

        if self.generation.get() != generation {
            log::debug!(
                "[Loader] Discarding response for {} (generation {} superseded by {})",
                module,
                generation,
                self.generation.get()
            );
            // 会话过期必须上报，否则界面会停留在已认证状态
            return match result {
                Err(ClientError::SessionExpired) => self.session_expired(),
                _ => NavigationOutcome::Superseded,
            };
        }

        match result {
            Ok(markup) => {
                show_region(ui, module, markup);
                NavigationOutcome::Rendered
            }
            Err(ClientError::SessionExpired) => self.session_expired(),
            Err(e) => {
                log::error!("[Loader] Failed to load {}: {}", module, e);
                show_region(ui, module, render::module_error());
                NavigationOutcome::Failed(e)
            }
        }
    }

    /// 请求期间已换成新会话时，过期结果属于旧会话，直接丢弃
    fn session_expired(&self) -> NavigationOutcome {
        if self.gateway.session().is_authenticated() {
            log::debug!("[Loader] Discarding expiry of a replaced session");
            NavigationOutcome::Superseded
        } else {
            NavigationOutcome::Failed(ClientError::SessionExpired)
        }
    }

    async fn load(&self, module: ModuleKind) -> ClientResult<Markup> {
        let gateway = &self.gateway;
        let markup = match module {
            ModuleKind::Dashboard => {
                let stats: DashboardStats = gateway.fetch_json(DASHBOARD_STATS_PATH).await?;
                render::dashboard(&stats, (self.clock)())
            }
            ModuleKind::Documents => {
                let docs = gateway.fetch_collection::<Document>().await?;
                render::documents(&docs, (self.clock)())
            }
            ModuleKind::Incidents => {
                let items = gateway.fetch_collection::<Incident>().await?;
                render::incidents(&items, (self.clock)())
            }
            ModuleKind::NonConformities => {
                let items = gateway.fetch_collection::<NonConformity>().await?;
                render::non_conformities(&items, (self.clock)())
            }
            ModuleKind::Audits => {
                let items = gateway.fetch_collection::<Audit>().await?;
                render::audits(&items, (self.clock)())
            }
            ModuleKind::Kpis => {
                let items = gateway.fetch_collection::<Kpi>().await?;
                render::kpis(&items)
            }
            ModuleKind::BusinessContinuity => {
                let plans = gateway.fetch_collection::<ContinuityPlan>().await?;
                let simulations = gateway.fetch_collection::<Simulation>().await?;
                render::business_continuity(&plans, &simulations)
            }
        };
        Ok(markup)
    }
}

fn show_region<U: UiAdapter>(ui: &U, module: ModuleKind, markup: Markup) {
    match module {
        ModuleKind::Dashboard => ui.show_dashboard(markup),
        other => ui.show_module(other, markup),
    }
}
