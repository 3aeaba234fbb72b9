use crate::world::{error::AdapterError, field_hooks::FieldHooks, storage::FieldStore};

pub mod fresh_attachments;
pub mod hook_table;
pub mod signal;

cfg_if! {
    if #[cfg(feature = "bevy_support")] {
        pub mod bevy;
    }
}

/// Wires the lifecycle handlers of field type `T` into storage engine `S`,
/// translating the engine's native notification mechanism into the uniform
/// add / set / remove contract:
///
/// * `on_add` runs exactly once per record, when `T` is first attached
/// * `on_set` runs only when an attached `T` is replaced, never on first
///   attachment and never on mutation through `get_field_mut`
/// * `on_remove` runs exactly once per record, on removal of `T` or on
///   destruction of a record still holding it
///
/// Only the handlers `T` defines are wired; a field type with no handlers
/// wires nothing at all.
pub trait Backend<S: FieldStore<T>, T: FieldHooks<S>> {
    /// Name of the native mechanism family, for diagnostics.
    const FAMILY: &'static str;

    fn wire(storage: &mut S) -> Result<(), AdapterError>;
}
