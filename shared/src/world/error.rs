use std::fmt::Debug;

use thiserror::Error;

/// Errors that can occur during storage engine record and field operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The record was never created or has already been destroyed
    #[error("Record {record} does not exist")]
    NoSuchRecord {
        record: String,
    },

    /// `add_field()` was called for a field the record already holds. Use `replace_field()` to update it
    #[error("Record {record} already holds a `{field}` field. Use `replace_field()` to update it")]
    FieldAlreadyPresent {
        record: String,
        field: &'static str,
    },

    /// `replace_field()` was called for a field the record does not hold. Use `add_field()` to attach it
    #[error("Record {record} holds no `{field}` field. Use `add_field()` to attach it")]
    FieldMissing {
        record: String,
        field: &'static str,
    },
}

impl StorageError {
    pub fn no_such_record(record: impl Debug) -> Self {
        Self::NoSuchRecord {
            record: format!("{:?}", record),
        }
    }

    pub fn field_already_present(record: impl Debug, field: &'static str) -> Self {
        Self::FieldAlreadyPresent {
            record: format!("{:?}", record),
            field,
        }
    }

    pub fn field_missing(record: impl Debug, field: &'static str) -> Self {
        Self::FieldMissing {
            record: format!("{:?}", record),
            field,
        }
    }
}

/// Errors that can occur when a handler recovers the host from a type-erased handle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostHandleError {
    /// The storage engine has no host attached
    #[error("No host is attached to this storage engine. Expected a host of type `{expected}`")]
    Detached {
        expected: &'static str,
    },

    /// The attached host is of a different type
    #[error("Host is not of the expected type `{expected}`")]
    TypeMismatch {
        expected: &'static str,
    },
}

/// Errors that can occur while wiring field hooks into a storage engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The field type was already wired through this registry
    #[error("Field type `{field}` is already registered with the {family} backend")]
    AlreadyRegistered {
        field: &'static str,
        family: &'static str,
    },

    /// The storage engine already has a native hook installed in this slot
    #[error("Native `{hook}` hook for field type `{field}` is already occupied. Hooks can only be installed once per field type")]
    HooksOccupied {
        field: &'static str,
        hook: &'static str,
    },

    /// The storage engine only accepts native hooks for field types no record holds yet
    #[error("Field type `{field}` is already stored on a record. Wire field types before attaching them")]
    FieldInUse {
        field: &'static str,
    },
}
