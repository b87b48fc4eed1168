use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Account kinds the backend distinguishes between.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TipoUsuario {
    Admin,
    Usuario,
}

impl TipoUsuario {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Usuario => "usuario",
        }
    }
}

impl fmt::Display for TipoUsuario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipoUsuario {
    type Err = &'static str;

    // The backend has stored both "admin" and "Admin" over time, so the
    // comparison is case-insensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("admin") {
            Ok(Self::Admin)
        } else if value.eq_ignore_ascii_case("usuario") {
            Ok(Self::Usuario)
        } else {
            Err("unknown account kind")
        }
    }
}

/// The authenticated account as returned by `GET /usuario/dados-cadastrais`.
///
/// `tipo_usuario` stays a plain string to accept whatever casing the backend
/// sends; use [`Usuario::tipo`] or [`Usuario::is_admin`] for logic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usuario {
    /// Unique identifier for the account.
    pub id: i64,

    /// Display name.
    pub nome: String,

    /// Contact e-mail address.
    #[serde(default)]
    pub email: String,

    /// Role marker, `"admin"` or `"usuario"` in any casing.
    pub tipo_usuario: String,
}

impl Usuario {
    /// Parsed role, when the marker is one of the known kinds.
    #[must_use]
    pub fn tipo(&self) -> Option<TipoUsuario> {
        self.tipo_usuario.parse().ok()
    }

    /// Whether this account may reach the administration screens.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.tipo() == Some(TipoUsuario::Admin)
    }
}

/// Response of `POST /auth/token`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// Opaque bearer credential.
    pub access_token: String,

    /// Always `"bearer"`.
    pub token_type: String,
}

/// Payload for self-service account creation (`POST /usuario/`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsuarioCreate {
    pub nome: String,
    pub cpf: String,
    pub email: String,
    pub senha: String,
    pub endereco: String,
}

/// Payload for administrator creation (`POST /admin/criar_conta`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminCreate {
    pub nome: String,
    pub cpf: String,
    pub senha: String,
}

/// Payload for password changes that require the current password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlterarSenha {
    pub senha_atual: String,
    pub nova_senha: String,
}

/// Payload for the password-recovery reset step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EsqueceuSenha {
    pub nova_senha: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario(tipo: &str) -> Usuario {
        Usuario {
            id: 1,
            nome: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            tipo_usuario: tipo.to_string(),
        }
    }

    #[test]
    fn tipo_usuario_roundtrip() {
        for (text, tipo) in [("admin", TipoUsuario::Admin), ("usuario", TipoUsuario::Usuario)] {
            assert_eq!(tipo.as_str(), text);
            assert_eq!(tipo.to_string(), text);
            assert_eq!(text.parse::<TipoUsuario>().unwrap(), tipo);
        }
    }

    #[test]
    fn tipo_usuario_is_case_insensitive() {
        assert_eq!("Admin".parse::<TipoUsuario>().unwrap(), TipoUsuario::Admin);
        assert_eq!("ADMIN".parse::<TipoUsuario>().unwrap(), TipoUsuario::Admin);
        assert_eq!(
            "Usuario".parse::<TipoUsuario>().unwrap(),
            TipoUsuario::Usuario
        );
    }

    #[test]
    fn tipo_usuario_rejects_unknown() {
        assert!("gerente".parse::<TipoUsuario>().is_err());
        assert!("".parse::<TipoUsuario>().is_err());
    }

    #[test]
    fn is_admin_matches_any_casing() {
        assert!(usuario("admin").is_admin());
        assert!(usuario("Admin").is_admin());
        assert!(!usuario("usuario").is_admin());
        assert!(!usuario("").is_admin());
    }

    #[test]
    fn usuario_deserializes_backend_payload() {
        let json = r#"{"id":1,"nome":"Ana","email":"ana@example.com","tipo_usuario":"usuario"}"#;
        let user: Usuario = serde_json::from_str(json).unwrap();
        assert_eq!(user, usuario("usuario"));
        assert!(!user.is_admin());
    }

    #[test]
    fn usuario_tolerates_missing_email() {
        // The admin lookup endpoint omits the e-mail field.
        let json = r#"{"id":7,"nome":"Bia","tipo_usuario":"admin"}"#;
        let user: Usuario = serde_json::from_str(json).unwrap();
        assert_eq!(user.email, "");
        assert!(user.is_admin());
    }

    #[test]
    fn token_response_deserializes() {
        let json = r#"{"access_token":"abc.def.ghi","token_type":"bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc.def.ghi");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn usuario_create_serializes_every_field() {
        let payload = UsuarioCreate {
            nome: "Ana".to_string(),
            cpf: "123.456.789-09".to_string(),
            email: "ana@example.com".to_string(),
            senha: "Senha123".to_string(),
            endereco: "Rua das Flores, 10".to_string(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        for field in ["nome", "cpf", "email", "senha", "endereco"] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }
}
