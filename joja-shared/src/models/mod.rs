//! Wire models exchanged with the Joja Garden backend.

pub mod acao;
pub mod errors;
pub mod imagem;
pub mod jardim;
pub mod planta;
pub mod user;

pub use acao::{Acao, AcaoCreate, TipoAcao};
pub use errors::ErrorResponse;
pub use imagem::{Imagem, ImagemCreate};
pub use jardim::{Jardim, JardimCreate};
pub use planta::{PlantaCatalogo, PlantaUsuario, PlantaUsuarioCreate};
pub use user::{
    AdminCreate, AlterarSenha, EsqueceuSenha, TipoUsuario, TokenResponse, Usuario, UsuarioCreate,
};
