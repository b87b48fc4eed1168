use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use shared::models::{
    Acao, AcaoCreate, AdminCreate, AlterarSenha, ErrorResponse, EsqueceuSenha, Imagem,
    ImagemCreate, Jardim, JardimCreate, PlantaUsuario, PlantaUsuarioCreate, PlantaCatalogo,
    TokenResponse, Usuario, UsuarioCreate,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use gloo_storage::{LocalStorage, Storage};

use crate::config::FrontendConfig;

/// localStorage key holding the bearer token; absence means logged out.
pub const TOKEN_STORAGE_KEY: &str = "joja_token";

/// Path prefix of the login screen, used by the 401 loop guard.
pub const LOGIN_PATH: &str = "/login";

thread_local! {
    static SHARED_CLIENT: OnceCell<JojaClient> = OnceCell::new();
}

/// Failures surfaced to pages.
///
/// Only [`ApiError::Unauthorized`] is handled centrally (forced logout and
/// redirect); the other kinds propagate so the calling page can show them
/// inline or as a toast.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Não foi possível conectar ao servidor.")]
    Network,
    /// The backend rejected the bearer token (401).
    #[error("Sessão expirada. Faça login novamente.")]
    Unauthorized,
    /// A 4xx with the backend's user-facing message.
    #[error("{0}")]
    Validation(String),
    /// A 5xx from the backend.
    #[error("Erro no servidor ({0}). Tente novamente mais tarde.")]
    Server(u16),
}

/// Read the persisted bearer token, when one exists.
#[must_use]
pub fn read_stored_token() -> Option<String> {
    LocalStorage::get(TOKEN_STORAGE_KEY).ok()
}

/// Persist the bearer token. Storage write failures (quota, disabled
/// storage) are non-fatal: the in-memory default still carries the session.
pub fn persist_token(token: &str) {
    let _ = LocalStorage::set(TOKEN_STORAGE_KEY, token.to_string());
}

/// Remove the persisted bearer token.
pub fn clear_stored_token() {
    LocalStorage::delete(TOKEN_STORAGE_KEY);
}

/// Whether a path belongs to the login screen or one of its sub-pages.
fn is_login_path(path: &str) -> bool {
    path.starts_with(LOGIN_PATH)
}

/// Whether the login screen is currently showing.
fn on_login_page() -> bool {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .is_some_and(|path| is_login_path(&path))
}

/// Force a full navigation to the login screen unless it is already showing.
///
/// Both the 401 interceptor and `Session::logout` funnel through here, so the
/// two paths cannot race into a double navigation.
pub fn redirect_to_login() {
    if on_login_page() {
        return;
    }
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
}

/// Map a non-2xx status (plus the backend's `detail`, when parseable) onto
/// the error taxonomy.
fn classify_status(status: StatusCode, detail: Option<String>) -> ApiError {
    if status == StatusCode::UNAUTHORIZED {
        ApiError::Unauthorized
    } else if status.is_client_error() {
        ApiError::Validation(
            detail.unwrap_or_else(|| "Não foi possível concluir a operação.".to_string()),
        )
    } else {
        ApiError::Server(status.as_u16())
    }
}

/// HTTP client for the Joja Garden backend.
///
/// Every request re-reads the persisted token so a swap takes effect on the
/// very next call; the in-memory default covers requests issued between a
/// fresh login and other code observing the storage write.
#[derive(Clone, Debug)]
pub struct JojaClient {
    base_url: String,
    client: Client,
    token: Arc<Mutex<Option<String>>>,
}

impl JojaClient {
    /// Create a new API client against the provided base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// The process-wide client instance, seeded from the persisted token so a
    /// reloaded tab keeps its session.
    #[must_use]
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let client = Self::new(FrontendConfig::new().api_base_url());
                client.set_token(read_stored_token());
                client
            })
            .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Replace the in-memory token default.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = token;
        }
    }

    /// The in-memory token default, when set.
    #[must_use]
    pub fn current_token(&self) -> Option<String> {
        self.token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match read_stored_token().or_else(|| self.current_token()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|_| ApiError::Network)?;
        self.intercept(response).await
    }

    /// Central response hook: successes pass through; a 401 tears the session
    /// down and redirects (except on the login screen, to avoid a loop);
    /// everything else is classified for the caller.
    async fn intercept(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED && !on_login_page() {
            clear_stored_token();
            self.set_token(None);
            redirect_to_login();
            return Err(ApiError::Unauthorized);
        }

        let detail = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|error| error.detail);
        Err(classify_status(status, detail))
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json().await.map_err(|_| ApiError::Network)
    }

    // ---- authentication -------------------------------------------------

    /// Exchange CPF + password for a bearer token.
    ///
    /// The backend takes an OAuth2 password form and calls the CPF field
    /// `username`.
    pub async fn login(&self, cpf: &str, senha: &str) -> Result<TokenResponse, ApiError> {
        let url = self.api_url("auth/token");
        let form = [("username", cpf), ("password", senha)];
        let response = self.send(self.client.post(url).form(&form)).await?;
        Self::decode(response).await
    }

    /// Fetch the account behind the current token.
    pub async fn get_me(&self) -> Result<Usuario, ApiError> {
        let url = self.api_url("usuario/dados-cadastrais");
        let response = self.send(self.apply_auth(self.client.get(url))).await?;
        Self::decode(response).await
    }

    // ---- accounts -------------------------------------------------------

    /// Look up an account by CPF (query parameter, masked or not).
    pub async fn get_user_by_cpf(&self, cpf: &str) -> Result<Usuario, ApiError> {
        let url = self.api_url("usuario/dados");
        let request = self.client.get(url).query(&[("cpf", cpf)]);
        let response = self.send(self.apply_auth(request)).await?;
        Self::decode(response).await
    }

    /// Self-service account creation.
    pub async fn create_user(&self, payload: &UsuarioCreate) -> Result<Usuario, ApiError> {
        let url = self.api_url("usuario/");
        let response = self.send(self.client.post(url).json(payload)).await?;
        Self::decode(response).await
    }

    /// Create an administrator account.
    pub async fn create_admin(&self, payload: &AdminCreate) -> Result<Usuario, ApiError> {
        let url = self.api_url("admin/criar_conta");
        let response = self
            .send(self.apply_auth(self.client.post(url)).json(payload))
            .await?;
        Self::decode(response).await
    }

    /// Fetch an administrator account by id.
    pub async fn get_admin(&self, admin_id: i64) -> Result<Usuario, ApiError> {
        let url = self.api_url(&format!("admin/{admin_id}"));
        let response = self.send(self.apply_auth(self.client.get(url))).await?;
        Self::decode(response).await
    }

    /// Delete an administrator account.
    pub async fn delete_admin(&self, admin_id: i64) -> Result<(), ApiError> {
        let url = self.api_url(&format!("admin/{admin_id}"));
        self.send(self.apply_auth(self.client.delete(url))).await?;
        Ok(())
    }

    /// Change an account's password, current password in hand.
    pub async fn change_password(
        &self,
        account_id: i64,
        payload: &AlterarSenha,
    ) -> Result<(), ApiError> {
        let url = self.api_url(&format!("admin/{account_id}/alterar-senha"));
        self.send(self.apply_auth(self.client.put(url)).json(payload))
            .await?;
        Ok(())
    }

    /// Password-recovery reset for the account found in the wizard.
    pub async fn reset_password(
        &self,
        account_id: i64,
        payload: &EsqueceuSenha,
    ) -> Result<(), ApiError> {
        let url = self.api_url(&format!("usuario/{account_id}/esqueceu-senha"));
        self.send(self.client.put(url).json(payload)).await?;
        Ok(())
    }

    // ---- catalog --------------------------------------------------------

    /// Page through the species catalog.
    pub async fn catalog_list(&self, skip: u32, limit: u32) -> Result<Vec<PlantaCatalogo>, ApiError> {
        let url = self.api_url("catalogo/visualizar");
        let request = self
            .client
            .get(url)
            .query(&[("skip", skip), ("limit", limit)]);
        let response = self.send(self.apply_auth(request)).await?;
        Self::decode(response).await
    }

    // ---- user plants ----------------------------------------------------

    /// The signed-in user's plant collection.
    pub async fn my_plants(&self) -> Result<Vec<PlantaUsuario>, ApiError> {
        let url = self.api_url("planta/minhas-plantas");
        let response = self.send(self.apply_auth(self.client.get(url))).await?;
        Self::decode(response).await
    }

    /// One plant of the signed-in user's collection.
    pub async fn get_plant(&self, planta_id: i64) -> Result<PlantaUsuario, ApiError> {
        let url = self.api_url(&format!("planta/{planta_id}"));
        let response = self.send(self.apply_auth(self.client.get(url))).await?;
        Self::decode(response).await
    }

    /// Remove a plant from the signed-in user's collection.
    pub async fn delete_plant(&self, planta_id: i64) -> Result<(), ApiError> {
        let url = self.api_url(&format!("planta/{planta_id}"));
        self.send(self.apply_auth(self.client.delete(url))).await?;
        Ok(())
    }

    /// Attach a catalog species to a user's collection (admin operation).
    pub async fn add_plant_to_user(
        &self,
        usuario_id: i64,
        payload: &PlantaUsuarioCreate,
    ) -> Result<PlantaUsuario, ApiError> {
        let url = self.api_url(&format!("planta/usuario/{usuario_id}/adicionar"));
        let response = self
            .send(self.apply_auth(self.client.post(url)).json(payload))
            .await?;
        Self::decode(response).await
    }

    // ---- care diary -----------------------------------------------------

    /// Diary entries for a plant, newest first.
    pub async fn list_actions(&self, planta_id: i64) -> Result<Vec<Acao>, ApiError> {
        let url = self.api_url(&format!("acao/{planta_id}/acoes"));
        let response = self.send(self.apply_auth(self.client.get(url))).await?;
        Self::decode(response).await
    }

    /// Record a care action on a plant.
    pub async fn register_action(
        &self,
        planta_id: i64,
        payload: &AcaoCreate,
    ) -> Result<Acao, ApiError> {
        let url = self.api_url(&format!("acao/{planta_id}/registrar"));
        let response = self
            .send(self.apply_auth(self.client.post(url)).json(payload))
            .await?;
        Self::decode(response).await
    }

    // ---- gallery --------------------------------------------------------

    /// Photo gallery of a plant.
    pub async fn gallery(&self, planta_id: i64) -> Result<Vec<Imagem>, ApiError> {
        let url = self.api_url(&format!("imagem/{planta_id}/galeria"));
        let response = self.send(self.apply_auth(self.client.get(url))).await?;
        Self::decode(response).await
    }

    /// Add a photo to a plant's gallery.
    pub async fn add_image(
        &self,
        planta_id: i64,
        payload: &ImagemCreate,
    ) -> Result<Imagem, ApiError> {
        let url = self.api_url(&format!("imagem/{planta_id}/adicionar"));
        let response = self
            .send(self.apply_auth(self.client.post(url)).json(payload))
            .await?;
        Self::decode(response).await
    }

    /// Remove a photo from a gallery.
    pub async fn delete_image(&self, imagem_id: i64) -> Result<(), ApiError> {
        let url = self.api_url(&format!("imagem/imagem/{imagem_id}"));
        self.send(self.apply_auth(self.client.delete(url))).await?;
        Ok(())
    }

    // ---- gardens --------------------------------------------------------

    /// The signed-in user's gardens, plants included.
    pub async fn my_gardens(&self) -> Result<Vec<Jardim>, ApiError> {
        let url = self.api_url("jardim/meus-jardins");
        let response = self.send(self.apply_auth(self.client.get(url))).await?;
        Self::decode(response).await
    }

    /// Create a garden.
    pub async fn create_garden(&self, payload: &JardimCreate) -> Result<Jardim, ApiError> {
        let url = self.api_url("jardim/criar_jardim");
        let response = self
            .send(self.apply_auth(self.client.post(url)).json(payload))
            .await?;
        Self::decode(response).await
    }

    /// Delete a garden. The backend refuses (409) while plants remain in it.
    pub async fn delete_garden(&self, jardim_id: i64) -> Result<(), ApiError> {
        let url = self.api_url(&format!("jardim/{jardim_id}"));
        self.send(self.apply_auth(self.client.delete(url))).await?;
        Ok(())
    }

    /// Move a plant into a garden (also used to move between gardens).
    pub async fn add_plant_to_garden(
        &self,
        jardim_id: i64,
        planta_id: i64,
    ) -> Result<(), ApiError> {
        let url = self.api_url(&format!("jardim/{jardim_id}/adicionar-planta/{planta_id}"));
        self.send(self.apply_auth(self.client.post(url))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_maps_the_taxonomy() {
        assert_eq!(
            classify_status(StatusCode::UNAUTHORIZED, None),
            ApiError::Unauthorized
        );
        assert_eq!(
            classify_status(StatusCode::BAD_REQUEST, Some("CPF já cadastrado".to_string())),
            ApiError::Validation("CPF já cadastrado".to_string())
        );
        assert_eq!(
            classify_status(StatusCode::CONFLICT, Some("O jardim precisa estar sem plantas para ser excluido".to_string())),
            ApiError::Validation("O jardim precisa estar sem plantas para ser excluido".to_string())
        );
        assert_eq!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR, None),
            ApiError::Server(500)
        );
        assert_eq!(
            classify_status(StatusCode::BAD_GATEWAY, Some("ignored".to_string())),
            ApiError::Server(502)
        );
    }

    #[test]
    fn classify_falls_back_without_detail() {
        let error = classify_status(StatusCode::NOT_FOUND, None);
        let ApiError::Validation(message) = error else {
            panic!("expected validation error");
        };
        assert!(!message.is_empty());
    }

    #[test]
    fn validation_errors_display_the_backend_message() {
        let error = ApiError::Validation("Jardim não encontrado".to_string());
        assert_eq!(error.to_string(), "Jardim não encontrado");
        assert_eq!(ApiError::Server(503).to_string(), "Erro no servidor (503). Tente novamente mais tarde.");
    }

    #[test]
    fn api_urls_join_cleanly() {
        let client = JojaClient::new("http://localhost:8000/");
        assert_eq!(
            client.api_url("/usuario/dados-cadastrais"),
            "http://localhost:8000/usuario/dados-cadastrais"
        );
        assert_eq!(
            client.api_url("acao/9/registrar"),
            "http://localhost:8000/acao/9/registrar"
        );
    }

    #[test]
    fn token_default_can_be_swapped_and_cleared() {
        let client = JojaClient::new("http://localhost:8000");
        client.set_token(Some("abc".to_string()));
        assert_eq!(client.current_token().as_deref(), Some("abc"));
        client.set_token(None);
        assert_eq!(client.current_token(), None);
    }

    #[test]
    fn a_401_on_the_login_screen_must_not_redirect_again() {
        // The loop guard: any path under /login swallows the redirect.
        assert!(is_login_path("/login"));
        assert!(is_login_path("/login/forgot-password"));
        assert!(!is_login_path("/"));
        assert!(!is_login_path("/my-plants"));
        assert!(!is_login_path("/account-details"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_storage_round_trips() {
        persist_token("um-token-qualquer");
        assert_eq!(read_stored_token().as_deref(), Some("um-token-qualquer"));
        clear_stored_token();
        assert_eq!(read_stored_token(), None);
    }

    #[wasm_bindgen_test]
    fn shared_client_picks_up_a_persisted_token() {
        persist_token("token-persistido");
        let client = JojaClient::new("http://localhost:8000");
        client.set_token(read_stored_token());
        assert_eq!(client.current_token().as_deref(), Some("token-persistido"));
        clear_stored_token();
    }
}
