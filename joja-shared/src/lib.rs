#![cfg_attr(not(test), forbid(unsafe_code))]

//! Shared wire models and pure validation for the Joja Garden web client.
//!
//! Field names follow the backend's JSON contract verbatim (`nome`,
//! `tipo_usuario`, `periodicidade_rega`, ...), so nothing in here renames or
//! reshapes what goes over the wire.

pub mod models;
pub mod validation;
