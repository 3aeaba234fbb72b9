use std::{collections::HashMap, marker::PhantomData};

use log::{debug, trace, warn};

use crate::{
    backends::Backend,
    kind_set::KindSet,
    world::{
        error::AdapterError,
        field_hooks::{FieldHook, FieldHooks},
        field_kind::FieldKind,
        storage::{FieldStore, Storage},
    },
};

use super::registry_config::{DuplicatePolicy, RegistryConfig};

/// Outcome of [`HookRegistry::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// The field type's handlers were wired into the storage engine.
    Wired,
    /// The field type defines no handlers; nothing was wired.
    Silent,
    /// The field type was registered before and the registry's policy
    /// tolerates it; nothing was wired.
    Duplicate,
}

/// A field type known to a [`HookRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRegistration {
    kind: FieldKind,
    handled: KindSet,
    family: &'static str,
}

impl FieldRegistration {
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn handled(&self) -> KindSet {
        self.handled
    }

    pub fn hooks(&self) -> impl Iterator<Item = FieldHook> {
        self.handled.kinds::<FieldHook>()
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn is_silent(&self) -> bool {
        self.handled.is_empty()
    }
}

/// Tracks which field types have been wired into one storage engine through
/// backend `B`, so that native hooks are never wired twice.
pub struct HookRegistry<S: Storage, B> {
    config: RegistryConfig,
    registrations: HashMap<FieldKind, FieldRegistration>,
    order: Vec<FieldKind>,
    phantom_s: PhantomData<fn(&mut S)>,
    phantom_b: PhantomData<B>,
}

impl<S: Storage, B> Default for HookRegistry<S, B> {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl<S: Storage, B> HookRegistry<S, B> {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            registrations: HashMap::new(),
            order: Vec::new(),
            phantom_s: PhantomData,
            phantom_b: PhantomData,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Wires the handlers of field type `T` into `storage`.
    pub fn register<T>(&mut self, storage: &mut S) -> Result<Registration, AdapterError>
    where
        S: FieldStore<T>,
        T: FieldHooks<S>,
        B: Backend<S, T>,
    {
        let kind = FieldKind::of::<T>();

        if self.registrations.contains_key(&kind) {
            return match self.config.duplicates {
                DuplicatePolicy::Reject => Err(AdapterError::AlreadyRegistered {
                    field: kind.name(),
                    family: B::FAMILY,
                }),
                DuplicatePolicy::Warn => {
                    warn!(
                        "Field type {} is already registered with the {} backend, skipping",
                        kind.short_name(),
                        B::FAMILY
                    );
                    Ok(Registration::Duplicate)
                }
                DuplicatePolicy::Ignore => Ok(Registration::Duplicate),
            };
        }

        let registration = if T::HANDLED.is_empty() {
            trace!("Field type {} has no hooks, nothing to wire", kind.short_name());
            Registration::Silent
        } else {
            B::wire(storage)?;
            debug!(
                "Wired {:?} for field type {} with the {} backend",
                T::HANDLED.kinds::<FieldHook>().collect::<Vec<_>>(),
                kind.short_name(),
                B::FAMILY
            );
            Registration::Wired
        };

        self.registrations.insert(
            kind,
            FieldRegistration {
                kind,
                handled: T::HANDLED,
                family: B::FAMILY,
            },
        );
        self.order.push(kind);

        Ok(registration)
    }

    pub fn is_registered<T: 'static>(&self) -> bool {
        self.registrations.contains_key(&FieldKind::of::<T>())
    }

    pub fn registration<T: 'static>(&self) -> Option<&FieldRegistration> {
        self.registrations.get(&FieldKind::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered field types, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldRegistration> {
        self.order
            .iter()
            .filter_map(|kind| self.registrations.get(kind))
    }
}
