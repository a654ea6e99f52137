//! Login gate — orchestrates form submission and page access checks
//!
//! Presentation handlers should be thin wrappers that delegate to this
//! service. All login business logic lives here.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::config::AuthSettings;
use crate::domain::{CredentialCheck, DomainError, Page, Role, UserRecord};
use crate::infrastructure::storage::SessionStore;
use crate::notifications::{SharedEventSink, Severity};

/// A login form submission as captured by the presentation layer
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub role: Role,
    pub username: String,
    pub password: String,
    pub remember: bool,
}

/// Terminal result of one login submission
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Credentials accepted; the record is persisted and the caller should
    /// redirect to the role's landing page
    Authenticated { record: UserRecord, redirect: Page },
    /// Credentials or input rejected; nothing was persisted
    Rejected(DomainError),
    /// Another validation was already in flight; this submission was dropped
    Ignored,
}

/// Outcome of a protected-page access check
#[derive(Debug, Clone, PartialEq)]
pub enum AccessDecision {
    /// Session is valid for this page; show the record in the header
    Allow(UserRecord),
    /// No session, or wrong role: navigate away
    Redirect(Page),
}

/// Login gate service, generic over the credential seam so tests can
/// substitute a counting double.
pub struct AuthGate<C: CredentialCheck> {
    credentials: Arc<C>,
    store: Arc<SessionStore>,
    sink: SharedEventSink,
    settings: AuthSettings,
    /// At most one validation in flight; self-clears after the guard timeout
    in_flight: Arc<AtomicBool>,
}

impl<C: CredentialCheck> AuthGate<C> {
    pub fn new(
        credentials: Arc<C>,
        store: Arc<SessionStore>,
        sink: SharedEventSink,
        settings: AuthSettings,
    ) -> Self {
        Self {
            credentials,
            store,
            sink,
            settings,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle one login form submission.
    ///
    /// Empty fields short-circuit without touching the validator. A second
    /// submission while one is still inside the latency window is ignored.
    /// The in-flight guard clears on a timer regardless of outcome, so a
    /// stuck guard cannot lock the form permanently.
    pub async fn submit(&self, form: LoginForm) -> LoginOutcome {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return LoginOutcome::Ignored;
        }
        let guard = self.in_flight.clone();
        let timeout = self.settings.guard_timeout();
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            guard.store(false, Ordering::SeqCst);
        });

        let username = form.username.trim().to_string();
        if username.is_empty() || form.password.is_empty() {
            self.sink
                .notify("Please fill in all fields", Severity::Error)
                .await;
            return LoginOutcome::Rejected(DomainError::MissingFields);
        }

        // Demo latency standing in for a network round trip
        tokio::time::sleep(self.settings.latency()).await;

        if !self.credentials.validate(form.role, &username, &form.password) {
            warn!(role = form.role.as_str(), username = %username, "Login rejected");
            self.sink
                .notify("Invalid username or password", Severity::Error)
                .await;
            return LoginOutcome::Rejected(DomainError::InvalidCredentials);
        }

        let record = UserRecord {
            username,
            display_name: self.credentials.display_name(form.role),
            role: form.role,
            login_time: Utc::now(),
        };

        self.store.write(&record, form.remember).await;
        self.sink
            .notify(
                &format!("Welcome, {}!", record.display_name),
                Severity::Success,
            )
            .await;
        info!(
            username = %record.username,
            role = record.role.as_str(),
            remember = form.remember,
            "Login accepted"
        );

        tokio::time::sleep(self.settings.redirect_delay()).await;
        LoginOutcome::Authenticated {
            redirect: record.role.landing_page(),
            record,
        }
    }

    /// Protected-page check, run once per page load.
    ///
    /// Absent session goes back to login; a valid session with the wrong
    /// role goes to that role's own landing page instead.
    pub async fn check_access(&self, required: Role) -> AccessDecision {
        match self.store.read().await {
            None => AccessDecision::Redirect(Page::Login),
            Some(record) if record.role != required => {
                AccessDecision::Redirect(record.role.landing_page())
            }
            Some(record) => AccessDecision::Allow(record),
        }
    }

    /// Login-page check: where to send an already-authenticated visitor.
    ///
    /// Only active when `redirect_on_existing_session` is configured on;
    /// the default keeps the login page reachable with a live session.
    pub async fn existing_session_redirect(&self) -> Option<Page> {
        if !self.settings.redirect_on_existing_session {
            return None;
        }
        self.store
            .read()
            .await
            .map(|record| record.role.landing_page())
    }

    /// Destroy the session in both tiers and send the user to login
    pub async fn logout(&self) -> Page {
        self.store.clear().await;
        self.sink
            .announce(
                "Logout Successful",
                "You have been logged out. Redirecting...",
            )
            .await;
        info!("Session cleared");
        Page::Login
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use super::*;
    use crate::domain::DemoCredentials;
    use crate::notifications::RecordingSink;

    fn fast_settings() -> AuthSettings {
        AuthSettings {
            latency_ms: 10,
            redirect_delay_ms: 5,
            guard_timeout_ms: 50,
            redirect_on_existing_session: false,
        }
    }

    fn gate_with(
        settings: AuthSettings,
    ) -> (Arc<AuthGate<DemoCredentials>>, Arc<SessionStore>, Arc<RecordingSink>) {
        let store = Arc::new(SessionStore::in_memory());
        let sink = Arc::new(RecordingSink::new());
        let gate = Arc::new(AuthGate::new(
            Arc::new(DemoCredentials::new()),
            store.clone(),
            sink.clone(),
            settings,
        ));
        (gate, store, sink)
    }

    fn form(role: Role, username: &str, password: &str) -> LoginForm {
        LoginForm {
            role,
            username: username.into(),
            password: password.into(),
            remember: false,
        }
    }

    /// Counting double for the validator-not-invoked assertion
    struct CountingCheck {
        calls: AtomicUsize,
        accept: bool,
    }

    impl CountingCheck {
        fn new(accept: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                accept,
            }
        }
    }

    impl CredentialCheck for CountingCheck {
        fn validate(&self, _role: Role, _username: &str, _password: &str) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.accept
        }

        fn display_name(&self, _role: Role) -> String {
            "Test User".to_string()
        }
    }

    #[tokio::test]
    async fn valid_user_login_end_to_end() {
        let (gate, store, _sink) = gate_with(fast_settings());

        let outcome = gate.submit(form(Role::User, "user", "user123")).await;
        match outcome {
            LoginOutcome::Authenticated { record, redirect } => {
                assert_eq!(record.display_name, "Juan Dela Cruz");
                assert_eq!(record.role, Role::User);
                assert_eq!(redirect, Page::UserLanding);
            }
            other => panic!("expected Authenticated, got {:?}", other),
        }

        // Record landed in the store
        assert!(store.read().await.is_some());
    }

    #[tokio::test]
    async fn wrong_password_is_rejected_without_store_mutation() {
        let (gate, store, sink) = gate_with(fast_settings());

        let outcome = gate
            .submit(form(Role::Administrator, "admin", "wrongpass"))
            .await;
        assert_eq!(
            outcome,
            LoginOutcome::Rejected(DomainError::InvalidCredentials)
        );
        assert_eq!(store.read().await, None);

        let notes = sink.notifications().await;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].1, Severity::Error);
    }

    #[tokio::test]
    async fn empty_username_short_circuits_before_the_validator() {
        let check = Arc::new(CountingCheck::new(true));
        let store = Arc::new(SessionStore::in_memory());
        let sink = Arc::new(RecordingSink::new());
        let gate = AuthGate::new(check.clone(), store, sink, fast_settings());

        let outcome = gate.submit(form(Role::User, "   ", "user123")).await;
        assert_eq!(outcome, LoginOutcome::Rejected(DomainError::MissingFields));
        assert_eq!(check.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn username_is_trimmed_before_matching() {
        let (gate, _store, _sink) = gate_with(fast_settings());
        let outcome = gate.submit(form(Role::User, "  user  ", "user123")).await;
        assert!(matches!(outcome, LoginOutcome::Authenticated { .. }));
    }

    #[tokio::test]
    async fn second_submission_in_flight_is_ignored() {
        let settings = AuthSettings {
            latency_ms: 100,
            redirect_delay_ms: 5,
            guard_timeout_ms: 200,
            redirect_on_existing_session: false,
        };
        let (gate, _store, _sink) = gate_with(settings);

        let first = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.submit(form(Role::User, "user", "user123")).await })
        };
        // Let the first submission enter its latency window
        tokio::time::sleep(Duration::from_millis(20)).await;

        let second = gate.submit(form(Role::User, "user", "user123")).await;
        assert_eq!(second, LoginOutcome::Ignored);

        let first = first.await.unwrap();
        assert!(matches!(first, LoginOutcome::Authenticated { .. }));
    }

    #[tokio::test]
    async fn guard_clears_after_its_timeout() {
        let (gate, _store, _sink) = gate_with(fast_settings());

        let _ = gate.submit(form(Role::User, "user", "user123")).await;
        // Past the 50ms guard timeout the form accepts submissions again
        tokio::time::sleep(Duration::from_millis(80)).await;

        let again = gate.submit(form(Role::User, "user", "user123")).await;
        assert!(matches!(again, LoginOutcome::Authenticated { .. }));
    }

    #[tokio::test]
    async fn access_check_redirects_by_role_not_to_login() {
        let (gate, _store, _sink) = gate_with(fast_settings());
        let _ = gate
            .submit(form(Role::Administrator, "admin", "admin123"))
            .await;

        // Administrator session on a page requiring User goes to the admin
        // landing page, not back to login
        assert_eq!(
            gate.check_access(Role::User).await,
            AccessDecision::Redirect(Page::AdminLanding)
        );

        match gate.check_access(Role::Administrator).await {
            AccessDecision::Allow(record) => assert_eq!(record.role, Role::Administrator),
            other => panic!("expected Allow, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn access_check_without_session_goes_to_login() {
        let (gate, _store, _sink) = gate_with(fast_settings());
        assert_eq!(
            gate.check_access(Role::User).await,
            AccessDecision::Redirect(Page::Login)
        );
    }

    #[tokio::test]
    async fn existing_session_redirect_honors_the_config_flag() {
        // Off by default: no redirect even with a live session
        let (gate, _store, _sink) = gate_with(fast_settings());
        let _ = gate.submit(form(Role::User, "user", "user123")).await;
        assert_eq!(gate.existing_session_redirect().await, None);

        // Opted in: redirect to the record's landing page
        let mut settings = fast_settings();
        settings.redirect_on_existing_session = true;
        let (gate, _store, _sink) = gate_with(settings);
        let _ = gate.submit(form(Role::User, "user", "user123")).await;
        assert_eq!(
            gate.existing_session_redirect().await,
            Some(Page::UserLanding)
        );
    }

    #[tokio::test]
    async fn logout_clears_the_session_and_returns_to_login() {
        let (gate, store, _sink) = gate_with(fast_settings());
        let _ = gate.submit(form(Role::User, "user", "user123")).await;
        assert!(store.read().await.is_some());

        assert_eq!(gate.logout().await, Page::Login);
        assert_eq!(store.read().await, None);
    }
}
