//! The capability contract a storage engine must satisfy before field hooks
//! can be wired into it.
//!
//! The check happens when the crate is built, never at run time: adapters
//! require `S: FieldStore<T>` in their bounds, so an engine missing an
//! operation cannot reach them. A missing operation is reported by the
//! compiler with the operation's name at the engine's `impl` site:
//!
//! ```compile_fail,E0046
//! use hookwire_shared::{FieldStore, Storage, StorageError};
//!
//! struct Position(f32, f32);
//!
//! #[derive(Default)]
//! struct BrokenWorld {
//!     next: u32,
//! }
//!
//! impl Storage for BrokenWorld {
//!     type Entity = u32;
//!     type Host<'a> = ();
//!
//!     fn create_record(&mut self) -> u32 {
//!         self.next += 1;
//!         self.next
//!     }
//!
//!     fn destroy_record(&mut self, _record: u32) -> Result<(), StorageError> {
//!         Ok(())
//!     }
//!
//!     fn record_exists(&self, record: u32) -> bool {
//!         record <= self.next
//!     }
//! }
//!
//! // error[E0046]: not all trait items implemented, missing: `remove_field`
//! //   --> impl FieldStore<Position> for BrokenWorld
//! impl FieldStore<Position> for BrokenWorld {
//!     fn add_field(&mut self, _record: u32, _value: Position) -> Result<(), StorageError> {
//!         Ok(())
//!     }
//!
//!     fn replace_field(&mut self, _record: u32, _value: Position) -> Result<(), StorageError> {
//!         Ok(())
//!     }
//!
//!     fn get_field(&self, _record: u32) -> Option<&Position> {
//!         None
//!     }
//!
//!     fn get_field_mut(&mut self, _record: u32) -> Option<&mut Position> {
//!         None
//!     }
//!
//!     fn has_field(&self, _record: u32) -> bool {
//!         false
//!     }
//! }
//! ```
//!
//! An engine that does not store a field type at all is rejected with the
//! engine and field type named in the message:
//!
//! ```compile_fail,E0277
//! use hookwire_shared::{validate_storage, Storage, StorageError};
//!
//! struct Position(f32, f32);
//!
//! struct RecordOnlyWorld;
//!
//! impl Storage for RecordOnlyWorld {
//!     type Entity = u32;
//!     type Host<'a> = ();
//!
//!     fn create_record(&mut self) -> u32 {
//!         0
//!     }
//!
//!     fn destroy_record(&mut self, _record: u32) -> Result<(), StorageError> {
//!         Ok(())
//!     }
//!
//!     fn record_exists(&self, _record: u32) -> bool {
//!         false
//!     }
//! }
//!
//! // error[E0277]: `RecordOnlyWorld` cannot store fields of type `Position`
//! validate_storage!(RecordOnlyWorld, [Position]);
//! ```

use std::{fmt::Debug, hash::Hash};

use super::{component_payload::ComponentPayload, error::StorageError};

/// Record-level operations of a storage engine.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a storage engine hookwire can adapt",
    label = "`{Self}` does not implement `Storage`",
    note = "a storage engine needs an `Entity` identity type, a `Host` handle type, and `create_record`, `destroy_record` and `record_exists`"
)]
pub trait Storage: 'static {
    /// The engine's native record identity.
    type Entity: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// What field handlers receive to reach the host that owns the engine.
    type Host<'a>;

    fn create_record(&mut self) -> Self::Entity;

    /// Destroys the record and every field still attached to it.
    fn destroy_record(&mut self, record: Self::Entity) -> Result<(), StorageError>;

    fn record_exists(&self, record: Self::Entity) -> bool;
}

/// Field-level operations of a storage engine, for one field type `T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot store fields of type `{T}`",
    label = "`{Self}` does not implement `FieldStore<{T}>`",
    note = "a storage engine needs `add_field`, `replace_field`, `get_field`, `get_field_mut`, `has_field` and `remove_field` for every field type it adapts"
)]
pub trait FieldStore<T: 'static>: Storage {
    /// Attaches a field the record does not hold yet.
    fn add_field(&mut self, record: Self::Entity, value: T) -> Result<(), StorageError>;

    /// Overwrites a field the record already holds. This is the only write
    /// that counts as an update.
    fn replace_field(&mut self, record: Self::Entity, value: T) -> Result<(), StorageError>;

    fn get_field(&self, record: Self::Entity) -> Option<&T>;

    /// Direct access for in-place mutation. Never reported as an update.
    fn get_field_mut(&mut self, record: Self::Entity) -> Option<&mut T>;

    fn has_field(&self, record: Self::Entity) -> bool;

    fn remove_field(&mut self, record: Self::Entity) -> Option<T>;
}

/// Record identity of storage engine `S`.
pub type RecordOf<S> = <S as Storage>::Entity;

/// Field payload type of storage engine `S`.
pub type PayloadOf<'a, S> = ComponentPayload<'a, S>;

/// Asserts at build time that a type is a complete storage engine, optionally
/// for a list of field types.
///
/// ```rust,ignore
/// validate_storage!(SignalWorld, [Position, Health]);
/// ```
#[macro_export]
macro_rules! validate_storage {
    ($storage:ty $(, [$($field:ty),* $(,)?])? $(,)?) => {
        const _: () = {
            const fn storage<S: $crate::Storage>() {}
            #[allow(dead_code)]
            const fn field<S: $crate::FieldStore<T>, T: 'static>() {}

            storage::<$storage>();
            $($(field::<$storage, $field>();)*)?
        };
    };
}
