pub mod batcher;
pub mod decomposer;
pub mod provider;
pub mod request_builder;
pub mod settings_resolver;
