use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Care actions the diary records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TipoAcao {
    Rega,
    Poda,
    Adubo,
}

impl TipoAcao {
    /// Canonical wire value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rega => "rega",
            Self::Poda => "poda",
            Self::Adubo => "adubo",
        }
    }

    /// Human label shown in the diary.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rega => "Rega",
            Self::Poda => "Poda",
            Self::Adubo => "Adubação",
        }
    }

    /// All kinds, in the order the registration form offers them.
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Rega, Self::Poda, Self::Adubo]
    }
}

impl fmt::Display for TipoAcao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TipoAcao {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "rega" => Ok(Self::Rega),
            "poda" => Ok(Self::Poda),
            "adubo" => Ok(Self::Adubo),
            _ => Err("unknown care action"),
        }
    }
}

/// One diary entry, newest first as the backend returns them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Acao {
    pub id: i64,
    pub tipo: TipoAcao,
    #[serde(default)]
    pub descricao: Option<String>,
    pub data_hora: NaiveDateTime,
}

/// Payload for `POST /acao/{planta_id}/registrar`.
///
/// `data_hora` is optional; the backend stamps "now" when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AcaoCreate {
    pub tipo: TipoAcao,
    pub descricao: Option<String>,
    pub data_hora: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tipo_acao_roundtrip() {
        for tipo in TipoAcao::all() {
            assert_eq!(tipo.as_str().parse::<TipoAcao>().unwrap(), tipo);
            let json = serde_json::to_string(&tipo).unwrap();
            assert_eq!(json, format!("\"{tipo}\""));
        }
    }

    #[test]
    fn tipo_acao_rejects_unknown() {
        assert!("transplante".parse::<TipoAcao>().is_err());
    }

    #[test]
    fn acao_deserializes_backend_payload() {
        let json = r#"{"id":4,"tipo":"rega","descricao":"200ml","data_hora":"2024-05-01T08:30:00"}"#;
        let acao: Acao = serde_json::from_str(json).unwrap();
        assert_eq!(acao.tipo, TipoAcao::Rega);
        assert_eq!(acao.descricao.as_deref(), Some("200ml"));
    }

    #[test]
    fn acao_create_omits_timestamp_for_backend_default() {
        let payload = AcaoCreate {
            tipo: TipoAcao::Adubo,
            descricao: None,
            data_hora: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"tipo\":\"adubo\""));
        assert!(json.contains("\"data_hora\":null"));
    }
}
