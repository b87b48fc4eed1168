use serde::{Deserialize, Serialize};

use super::PlantaUsuario;

/// A named grouping of a user's plants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Jardim {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub plantas: Vec<PlantaUsuario>,
}

/// Payload for `POST /jardim/criar_jardim`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JardimCreate {
    pub nome: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jardim_defaults_to_no_plants() {
        let json = r#"{"id":2,"nome":"Varanda"}"#;
        let jardim: Jardim = serde_json::from_str(json).unwrap();
        assert_eq!(jardim.nome, "Varanda");
        assert!(jardim.plantas.is_empty());
    }

    #[test]
    fn jardim_nests_plants() {
        let json = r#"{
            "id": 2,
            "nome": "Varanda",
            "plantas": [{"id":9,"apelido":null,"catalogo":{"id":3,"nome":"Samambaia"}}]
        }"#;
        let jardim: Jardim = serde_json::from_str(json).unwrap();
        assert_eq!(jardim.plantas.len(), 1);
        assert_eq!(jardim.plantas[0].display_name(), "Samambaia");
    }
}
