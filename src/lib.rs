pub mod app_config;
pub mod domain;
pub mod dump;
mod extensions;
pub mod record;
pub mod records;
