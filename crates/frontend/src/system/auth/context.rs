use super::storage::BrowserStorage;
use contracts::shared::config::ConsoleConfig;
use contracts::system::auth::{AuthError, AuthSession, LoginRequest};
use leptos::prelude::*;

pub type Session = AuthSession<BrowserStorage>;

/// Auth context provider component.
///
/// The session is restored from `localStorage` once, when the provider is
/// created.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let config = use_context::<ConsoleConfig>().expect("ConsoleConfig not found in component tree");
    let (session, set_session) = signal(Session::restore(BrowserStorage, config.auth));

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session
pub fn use_auth() -> (ReadSignal<Session>, WriteSignal<Session>) {
    let session =
        use_context::<ReadSignal<Session>>().expect("AuthProvider not found in component tree");
    let set_session =
        use_context::<WriteSignal<Session>>().expect("AuthProvider not found in component tree");

    (session, set_session)
}

/// Helper: Perform login
pub fn do_login(set_session: WriteSignal<Session>, request: &LoginRequest) -> Result<(), AuthError> {
    set_session
        .try_update(|session| session.login(request))
        .unwrap_or_else(|| Err(AuthError::Storage("session disposed".to_string())))
}

/// Helper: Perform logout
pub fn do_logout(set_session: WriteSignal<Session>) -> Result<(), AuthError> {
    set_session
        .try_update(|session| session.logout())
        .unwrap_or(Ok(()))
}
