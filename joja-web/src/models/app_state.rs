use shared::models::Usuario;
use yewdux::Store;

/// Session state every page reads.
///
/// `loading` starts `true`: the token check runs at mount and the UI must not
/// flash the logged-out chrome before it settles. `offline` marks a
/// resolution that failed on connectivity while a token is still persisted.
#[derive(Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<Usuario>,
    pub loading: bool,
    pub offline: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            offline: false,
        }
    }
}

impl AppState {
    /// Whether the signed-in account is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(Usuario::is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(tipo: &str) -> Usuario {
        Usuario {
            id: 1,
            nome: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            tipo_usuario: tipo.to_string(),
        }
    }

    #[test]
    fn starts_loading_with_no_user() {
        let state = AppState::default();
        assert!(state.loading);
        assert!(state.user.is_none());
        assert!(!state.offline);
        assert!(!state.is_admin());
    }

    #[test]
    fn is_admin_follows_role_case_insensitively() {
        let mut state = AppState::default();
        state.user = Some(user("usuario"));
        assert!(!state.is_admin());

        state.user = Some(user("admin"));
        assert!(state.is_admin());

        state.user = Some(user("ADMIN"));
        assert!(state.is_admin());
    }
}
