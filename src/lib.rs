pub mod args;
pub mod commands;
pub mod error;
pub mod family;
pub mod firmware;
pub mod request;
pub mod settings;
pub mod toolchain;
