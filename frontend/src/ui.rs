//! UI 适配层
//!
//! 核心逻辑只通过 `UiAdapter` 操作界面，不直接接触 DOM。
//! Leptos 外壳用信号实现它，测试用 `RecordingUi` 记录调用。

use std::time::Duration;

use sgcn_shared::UserProfile;

use crate::demo::DemoStep;
use crate::module::ModuleKind;
use crate::notify::NotificationKind;
use crate::render::Markup;

pub trait UiAdapter {
    /// 切换到登录视图
    fn show_login(&self);

    /// 切换到已认证视图并显示用户信息
    fn show_app(&self, user: &UserProfile);

    /// 显示仪表盘区域
    fn show_dashboard(&self, markup: Markup);

    /// 显示通用内容区域
    fn show_module(&self, module: ModuleKind, markup: Markup);

    fn notify(&self, kind: NotificationKind, message: &str, duration: Duration);

    /// 显示演示讲解浮层
    fn show_overlay(&self, step: DemoStep, duration: Duration);
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    pub enum UiEvent {
        Login,
        App(String),
        Dashboard(String),
        Module(ModuleKind, String),
        Notify(NotificationKind, String),
        Overlay(DemoStep),
    }

    /// 记录所有 UI 调用的测试替身
    #[derive(Default)]
    pub struct RecordingUi {
        pub events: RefCell<Vec<UiEvent>>,
    }

    impl RecordingUi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<UiEvent> {
            self.events.borrow().clone()
        }

        pub fn last(&self) -> Option<UiEvent> {
            self.events.borrow().last().cloned()
        }

        pub fn notifications(&self) -> Vec<(NotificationKind, String)> {
            self.events
                .borrow()
                .iter()
                .filter_map(|e| match e {
                    UiEvent::Notify(kind, msg) => Some((*kind, msg.clone())),
                    _ => None,
                })
                .collect()
        }

        /// 最后一次渲染到内容区或仪表盘的 HTML
        pub fn last_markup(&self) -> Option<String> {
            self.events.borrow().iter().rev().find_map(|e| match e {
                UiEvent::Dashboard(html) | UiEvent::Module(_, html) => Some(html.clone()),
                _ => None,
            })
        }

        pub fn clear(&self) {
            self.events.borrow_mut().clear();
        }
    }

    impl UiAdapter for RecordingUi {
        fn show_login(&self) {
            self.events.borrow_mut().push(UiEvent::Login);
        }

        fn show_app(&self, user: &UserProfile) {
            self.events
                .borrow_mut()
                .push(UiEvent::App(user.full_name.clone()));
        }

        fn show_dashboard(&self, markup: Markup) {
            self.events
                .borrow_mut()
                .push(UiEvent::Dashboard(markup.into_string()));
        }

        fn show_module(&self, module: ModuleKind, markup: Markup) {
            self.events
                .borrow_mut()
                .push(UiEvent::Module(module, markup.into_string()));
        }

        fn notify(&self, kind: NotificationKind, message: &str, _duration: Duration) {
            self.events
                .borrow_mut()
                .push(UiEvent::Notify(kind, message.to_string()));
        }

        fn show_overlay(&self, step: DemoStep, _duration: Duration) {
            self.events.borrow_mut().push(UiEvent::Overlay(step));
        }
    }
}
