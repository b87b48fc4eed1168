use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A species entry in the shared catalog.
///
/// Care periodicities are expressed in days; defaults mirror the backend's
/// schema defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantaCatalogo {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub nome_cientifico: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub familia: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub instrucoes_cuidado: Option<String>,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default = "default_rega")]
    pub periodicidade_rega: u32,
    #[serde(default = "default_poda")]
    pub periodicidade_poda: u32,
    #[serde(default = "default_adubo")]
    pub periodicidade_adubo: u32,
}

fn default_rega() -> u32 {
    2
}

fn default_poda() -> u32 {
    30
}

fn default_adubo() -> u32 {
    15
}

/// A plant owned by a user, always carrying its catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantaUsuario {
    pub id: i64,
    #[serde(default)]
    pub apelido: Option<String>,
    #[serde(default)]
    pub data_plantio: Option<NaiveDate>,
    #[serde(default)]
    pub jardim_id: Option<i64>,
    pub catalogo: PlantaCatalogo,
}

impl PlantaUsuario {
    /// Nickname when set, catalog name otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.apelido.as_deref() {
            Some(apelido) if !apelido.trim().is_empty() => apelido,
            _ => &self.catalogo.nome,
        }
    }
}

/// Payload for attaching a catalog species to a user's collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantaUsuarioCreate {
    pub id_planta_catalogo: i64,
    pub apelido: Option<String>,
    pub data_plantio: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogo() -> PlantaCatalogo {
        PlantaCatalogo {
            id: 3,
            nome: "Samambaia".to_string(),
            nome_cientifico: Some("Nephrolepis exaltata".to_string()),
            categoria: Some("Folhagem".to_string()),
            familia: None,
            descricao: None,
            instrucoes_cuidado: None,
            img_url: None,
            periodicidade_rega: 2,
            periodicidade_poda: 30,
            periodicidade_adubo: 15,
        }
    }

    #[test]
    fn catalogo_periodicity_defaults_apply() {
        let json = r#"{"id":1,"nome":"Alecrim"}"#;
        let planta: PlantaCatalogo = serde_json::from_str(json).unwrap();
        assert_eq!(planta.periodicidade_rega, 2);
        assert_eq!(planta.periodicidade_poda, 30);
        assert_eq!(planta.periodicidade_adubo, 15);
        assert!(planta.nome_cientifico.is_none());
    }

    #[test]
    fn planta_usuario_nests_catalogo() {
        let json = r#"{
            "id": 9,
            "apelido": "Sam",
            "data_plantio": "2024-03-10",
            "catalogo": {"id":3,"nome":"Samambaia","nome_cientifico":"Nephrolepis exaltata","categoria":"Folhagem"}
        }"#;
        let planta: PlantaUsuario = serde_json::from_str(json).unwrap();
        assert_eq!(planta.id, 9);
        assert_eq!(planta.display_name(), "Sam");
        assert_eq!(planta.catalogo.nome, "Samambaia");
        assert_eq!(
            planta.data_plantio,
            Some(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
        );
        assert!(planta.jardim_id.is_none());
    }

    #[test]
    fn display_name_falls_back_to_catalog() {
        let sem_apelido = PlantaUsuario {
            id: 1,
            apelido: None,
            data_plantio: None,
            jardim_id: None,
            catalogo: catalogo(),
        };
        assert_eq!(sem_apelido.display_name(), "Samambaia");

        let apelido_vazio = PlantaUsuario {
            apelido: Some("   ".to_string()),
            ..sem_apelido
        };
        assert_eq!(apelido_vazio.display_name(), "Samambaia");
    }

    #[test]
    fn planta_usuario_create_wire_field_names() {
        let payload = PlantaUsuarioCreate {
            id_planta_catalogo: 3,
            apelido: Some("Sam".to_string()),
            data_plantio: NaiveDate::from_ymd_opt(2024, 3, 10),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"id_planta_catalogo\":3"));
        assert!(json.contains("\"data_plantio\":\"2024-03-10\""));
    }
}
