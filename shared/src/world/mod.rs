pub mod component_payload;
pub mod error;
pub mod field_hooks;
pub mod field_kind;
pub mod storage;
