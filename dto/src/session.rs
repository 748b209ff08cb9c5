use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Login form of the backend.
#[derive(Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Credentials {
    correo: String,
    password: String,
}

impl Credentials {
    pub fn new(correo: String, password: String) -> Self {
        Self { correo, password }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credentials {{correo={}, password=MASKED}}", self.correo)
    }
}

/// The user a backend session belongs to, as returned by `/validate-token`.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct UserSession {
    #[serde(rename = "IdUsuario")]
    id_usuario: u32,
    #[serde(rename = "IdRol")]
    id_rol: u32,
}

impl UserSession {
    pub fn new(id_usuario: u32, id_rol: u32) -> Self {
        Self { id_usuario, id_rol }
    }
}
