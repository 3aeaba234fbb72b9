use std::{
    any::{type_name, Any},
    fmt,
};

use super::{error::HostHandleError, storage::Storage};

/// What a field handler receives: the record whose field changed, plus the
/// storage engine's handle to its host.
pub struct ComponentPayload<'a, S: Storage> {
    record: S::Entity,
    host: S::Host<'a>,
}

impl<'a, S: Storage> ComponentPayload<'a, S> {
    pub fn new(record: S::Entity, host: S::Host<'a>) -> Self {
        Self { record, host }
    }

    pub fn record(&self) -> S::Entity {
        self.record
    }

    pub fn host(&self) -> &S::Host<'a> {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut S::Host<'a> {
        &mut self.host
    }

    pub fn into_host(self) -> S::Host<'a> {
        self.host
    }
}

impl<'a, S: Storage> Clone for ComponentPayload<'a, S>
where
    S::Host<'a>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            record: self.record,
            host: self.host.clone(),
        }
    }
}

impl<'a, S: Storage> Copy for ComponentPayload<'a, S> where S::Host<'a>: Copy {}

impl<'a, S: Storage> fmt::Debug for ComponentPayload<'a, S>
where
    S::Host<'a>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentPayload")
            .field("record", &self.record)
            .field("host", &self.host)
            .finish()
    }
}

/// Type-erased host handle for storage engines that do not know their
/// host's type.
///
/// The host is recovered with a checked [`HostHandle::get`]; asking for the
/// wrong type is an error, never undefined behavior.
#[derive(Clone, Copy, Default)]
pub struct HostHandle<'a> {
    host: Option<&'a (dyn Any + 'static)>,
}

impl<'a> HostHandle<'a> {
    pub fn new(host: &'a (dyn Any + 'static)) -> Self {
        Self { host: Some(host) }
    }

    pub fn detached() -> Self {
        Self { host: None }
    }

    pub fn from_option(host: Option<&'a (dyn Any + 'static)>) -> Self {
        Self { host }
    }

    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    pub fn get<H: Any>(&self) -> Result<&'a H, HostHandleError> {
        let host = self.host.ok_or(HostHandleError::Detached {
            expected: type_name::<H>(),
        })?;
        host.downcast_ref::<H>()
            .ok_or(HostHandleError::TypeMismatch {
                expected: type_name::<H>(),
            })
    }
}

impl fmt::Debug for HostHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_attached() {
            f.write_str("HostHandle(attached)")
        } else {
            f.write_str("HostHandle(detached)")
        }
    }
}
