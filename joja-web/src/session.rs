use std::cell::Cell;
use std::rc::Rc;

use yewdux::Dispatch;

use crate::api::{self, ApiError, JojaClient};
use crate::models::app_state::AppState;

/// Session controller: the single writer of [`AppState`].
///
/// Constructed once at application start and handed down through Yew context.
/// Transitions are serialized by an epoch counter: `refresh_user`, `login`
/// and `logout` each issue a new epoch, and an async result only commits
/// while its epoch is still the latest. A who-am-I response that lands after
/// a logout is therefore dropped instead of resurrecting the session.
#[derive(Clone)]
pub struct Session {
    client: JojaClient,
    dispatch: Dispatch<AppState>,
    epoch: Rc<Cell<u64>>,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.epoch, &other.epoch)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("epoch", &self.epoch.get())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create the controller around the shared client and store dispatch.
    #[must_use]
    pub fn new(client: JojaClient, dispatch: Dispatch<AppState>) -> Self {
        Self {
            client,
            dispatch,
            epoch: Rc::new(Cell::new(0)),
        }
    }

    fn next_epoch(&self) -> u64 {
        let next = self.epoch.get() + 1;
        self.epoch.set(next);
        next
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get() == epoch
    }

    /// Re-resolve the current user from the persisted token.
    ///
    /// No token → unauthenticated. Token present → mirror it into the client
    /// default first (requests issued while this resolves must already carry
    /// it), then ask the backend who we are. A 401 tears the session down; a
    /// connectivity or server failure keeps the token and marks the state
    /// `offline` so the route guard offers a retry instead of bouncing a
    /// possibly-valid session to the login screen. The loading flag is
    /// cleared on every committed exit path.
    pub async fn refresh_user(&self) {
        let epoch = self.next_epoch();

        let Some(token) = api::read_stored_token() else {
            self.dispatch.reduce_mut(|state| {
                state.user = None;
                state.offline = false;
                state.loading = false;
            });
            return;
        };

        self.client.set_token(Some(token));

        let result = self.client.get_me().await;
        if !self.is_current(epoch) {
            // A later login/logout already owns the state.
            return;
        }

        match result {
            Ok(user) => self.dispatch.reduce_mut(|state| {
                state.user = Some(user);
                state.offline = false;
                state.loading = false;
            }),
            Err(ApiError::Unauthorized) => self.logout(),
            Err(_) => self.dispatch.reduce_mut(|state| {
                state.user = None;
                state.offline = true;
                state.loading = false;
            }),
        }
    }

    /// Authenticate and resolve the session in one serialized step.
    ///
    /// On success the token is persisted and mirrored into the client default
    /// *before* this function returns, so any navigation the caller performs
    /// next fires requests that already carry the fresh credential.
    pub async fn login(&self, cpf: &str, senha: &str) -> Result<(), ApiError> {
        let token = self.client.login(cpf, senha).await?;

        api::persist_token(&token.access_token);
        self.client.set_token(Some(token.access_token));

        self.dispatch.reduce_mut(|state| {
            state.loading = true;
            state.offline = false;
        });
        self.refresh_user().await;
        Ok(())
    }

    /// Clear every trace of the session and land on the login screen.
    ///
    /// Callable from anywhere, any number of times: all steps are no-ops when
    /// already logged out, and the redirect skips itself when the login
    /// screen is already showing. Converges with the adapter's 401 handling
    /// on the same end state.
    pub fn logout(&self) {
        self.next_epoch();
        api::clear_stored_token();
        self.client.set_token(None);
        self.dispatch.reduce_mut(|state| {
            state.user = None;
            state.offline = false;
            state.loading = false;
        });
        api::redirect_to_login();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn session() -> Session {
        Session::new(JojaClient::new("http://localhost:8000"), Dispatch::global())
    }

    // Park the test page on the login path so the logout redirect no-ops
    // (also exercising the loop guard) instead of navigating the runner away.
    fn park_on_login_path() {
        let history = web_sys::window().unwrap().history().unwrap();
        history
            .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(api::LOGIN_PATH))
            .unwrap();
    }

    #[wasm_bindgen_test]
    async fn refresh_without_token_lands_unauthenticated() {
        api::clear_stored_token();
        let session = session();

        session.refresh_user().await;

        let state = session.dispatch.get();
        assert!(state.user.is_none());
        assert!(!state.loading);
        assert!(!state.offline);
    }

    #[wasm_bindgen_test]
    fn logout_is_idempotent() {
        park_on_login_path();
        api::persist_token("stale-token");
        let session = session();

        session.logout();
        let first = session.dispatch.get();
        session.logout();
        let second = session.dispatch.get();

        assert!(api::read_stored_token().is_none());
        assert_eq!(session.client.current_token(), None);
        assert_eq!(first, second);
        assert!(second.user.is_none());
        assert!(!second.loading);
    }

    #[wasm_bindgen_test]
    fn logout_discards_inflight_refresh_epochs() {
        park_on_login_path();
        let session = session();
        let epoch = session.next_epoch();
        session.logout();
        assert!(!session.is_current(epoch));
    }
}
