pub mod hook_registry;
pub mod registry_config;
