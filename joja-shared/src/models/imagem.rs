use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One gallery photo of a user's plant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Imagem {
    pub id: i64,
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    pub url: String,
    pub data_hora: NaiveDateTime,
}

/// Payload for `POST /imagem/{planta_id}/adicionar`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImagemCreate {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imagem_deserializes_backend_payload() {
        let json = r#"{
            "id": 11,
            "titulo": "Primeira flor",
            "descricao": null,
            "url": "https://fotos.example/11.jpg",
            "data_hora": "2024-06-02T14:00:00"
        }"#;
        let imagem: Imagem = serde_json::from_str(json).unwrap();
        assert_eq!(imagem.titulo.as_deref(), Some("Primeira flor"));
        assert!(imagem.descricao.is_none());
        assert_eq!(imagem.url, "https://fotos.example/11.jpg");
    }
}
