use super::*;
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq)]
enum HostCall {
    ShowLogin,
    Login(String, String),
    Open(ModuleKind),
    Overlay(DemoStep, Duration),
}

/// 记录调用的演示宿主
struct RecordingHost {
    authenticated: Cell<bool>,
    login_succeeds: bool,
    calls: RefCell<Vec<HostCall>>,
}

impl RecordingHost {
    fn new(authenticated: bool, login_succeeds: bool) -> Self {
        Self {
            authenticated: Cell::new(authenticated),
            login_succeeds,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl DemoHost for RecordingHost {
    fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    fn show_login(&self) {
        self.calls.borrow_mut().push(HostCall::ShowLogin);
    }

    async fn login(&self, username: &str, password: &str) -> bool {
        self.calls
            .borrow_mut()
            .push(HostCall::Login(username.to_string(), password.to_string()));
        self.authenticated.set(self.login_succeeds);
        self.login_succeeds
    }

    async fn open(&self, module: ModuleKind) {
        self.calls.borrow_mut().push(HostCall::Open(module));
    }

    fn overlay(&self, step: DemoStep, duration: Duration) {
        self.calls.borrow_mut().push(HostCall::Overlay(step, duration));
    }
}

// =========================================================
// DemoDriver
// =========================================================

#[test]
fn test_driver_is_bounded_without_wrapping() {
    let mut driver = DemoDriver::new();
    assert!(driver.next().is_none());
    assert!(driver.prev().is_none());

    assert_eq!(driver.start(), DemoStep::Welcome);
    assert!(!driver.has_prev());
    assert!(driver.prev().is_none());
    assert_eq!(driver.position(), Some(0));

    let mut visited = vec![DemoStep::Welcome];
    while let Some(step) = driver.next() {
        visited.push(step);
    }
    assert_eq!(visited, DemoStep::ALL);
    assert!(!driver.has_next());
    assert_eq!(driver.current(), Some(DemoStep::Summary));

    assert_eq!(driver.prev(), Some(DemoStep::BusinessContinuity));
    assert!(driver.has_next());
}

#[test]
fn test_driver_exit() {
    let mut driver = DemoDriver::new();
    driver.start();
    driver.next();

    assert!(driver.exit());
    assert!(!driver.is_active());
    assert!(driver.current().is_none());
    assert!(!driver.exit());
}

#[test]
fn test_step_metadata() {
    assert_eq!(DemoStep::ALL.len(), 10);
    for (i, step) in DemoStep::ALL.into_iter().enumerate() {
        assert_eq!(step.index(), i);
        assert!(!step.title().is_empty());
        assert!(!step.overlay().points.is_empty());
    }
    assert_eq!(DemoStep::Kpis.module(), Some(ModuleKind::Kpis));
    assert_eq!(DemoStep::Summary.module(), None);

    let config = DemoConfig::default();
    assert_eq!(DemoStep::Login.duration(&config), Duration::from_secs(10));
    assert_eq!(DemoStep::Summary.duration(&config), Duration::from_secs(15));
    assert_eq!(DemoStep::Audits.duration(&config), Duration::from_secs(8));
}

// =========================================================
// run_step
// =========================================================

#[tokio::test]
async fn test_welcome_shows_login_only_when_signed_out() {
    let config = DemoConfig::default();

    let host = RecordingHost::new(false, true);
    run_step(DemoStep::Welcome, &host, &config).await;
    assert_eq!(
        host.calls(),
        [
            HostCall::ShowLogin,
            HostCall::Overlay(DemoStep::Welcome, Duration::from_secs(8))
        ]
    );

    let host = RecordingHost::new(true, true);
    run_step(DemoStep::Welcome, &host, &config).await;
    assert_eq!(
        host.calls(),
        [HostCall::Overlay(DemoStep::Welcome, Duration::from_secs(8))]
    );
}

#[tokio::test]
async fn test_dashboard_step_logs_in_before_navigating() {
    let config = DemoConfig::default();
    let host = RecordingHost::new(false, true);

    run_step(DemoStep::Dashboard, &host, &config).await;

    assert_eq!(
        host.calls(),
        [
            HostCall::Login("admin".into(), "admin".into()),
            HostCall::Overlay(DemoStep::Dashboard, Duration::from_secs(8)),
            HostCall::Open(ModuleKind::Dashboard),
        ]
    );
}

#[tokio::test]
async fn test_module_step_skips_login_when_authenticated() {
    let config = DemoConfig::default();
    let host = RecordingHost::new(true, true);

    run_step(DemoStep::BusinessContinuity, &host, &config).await;

    assert_eq!(
        host.calls(),
        [
            HostCall::Overlay(DemoStep::BusinessContinuity, Duration::from_secs(8)),
            HostCall::Open(ModuleKind::BusinessContinuity),
        ]
    );
}

#[tokio::test]
async fn test_failed_auto_login_does_not_navigate() {
    let config = DemoConfig::default();
    let host = RecordingHost::new(false, false);

    run_step(DemoStep::Documents, &host, &config).await;

    let calls = host.calls();
    assert!(!calls.iter().any(|c| matches!(c, HostCall::Open(_))));
    assert_eq!(calls.len(), 2);
}

#[tokio::test]
async fn test_leave_returns_to_dashboard() {
    let host = RecordingHost::new(true, true);
    leave(&host).await;
    assert_eq!(host.calls(), [HostCall::Open(ModuleKind::Dashboard)]);

    let host = RecordingHost::new(false, true);
    leave(&host).await;
    assert!(host.calls().is_empty());
}
