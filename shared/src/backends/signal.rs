use std::any::type_name;

use crate::{
    events::EventKind,
    world::{
        component_payload::ComponentPayload,
        error::AdapterError,
        field_hooks::{FieldHook, FieldHooks},
        storage::{FieldStore, Storage},
    },
};

use super::Backend;

/// A boxed field lifecycle callback, as native hook mechanisms store them.
pub type Listener<S> = Box<dyn for<'a> FnMut(ComponentPayload<'a, S>)>;

/// Boxes `f` as a [`Listener`].
///
/// Going through this function lets the compiler infer a closure's argument
/// as a payload of any lifetime.
pub fn listener<S, F>(f: F) -> Listener<S>
where
    S: Storage,
    F: for<'a> FnMut(ComponentPayload<'a, S>) + 'static,
{
    Box::new(f)
}

/// Native notifications of a signal/connect storage engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /// A field was attached to a record.
    Construct,
    /// An attached field was replaced.
    Update,
    /// A field is about to be removed, explicitly or by record destruction.
    Destroy,
}

/// A storage engine publishing per-field-type signals that any number of
/// listeners can connect to.
pub trait SignalStorage: Storage + Sized {
    fn connect<T: 'static>(&mut self, signal: Signal, listener: Listener<Self>);

    /// Marks the field hooks of `T` as connected. Returns `false` if they
    /// already were, in which case nothing may be connected again.
    fn claim_hooks<T: 'static>(&mut self) -> bool;
}

/// Adapter for [`SignalStorage`] engines.
///
/// Construct, update and destroy signals already carry add / set / remove
/// semantics, so each handler is connected to its signal directly. A field
/// type is connected at most once per engine.
pub struct Signals;

impl<S, T> Backend<S, T> for Signals
where
    S: SignalStorage + FieldStore<T>,
    T: FieldHooks<S>,
{
    const FAMILY: &'static str = "signal";

    fn wire(storage: &mut S) -> Result<(), AdapterError> {
        if T::HANDLED.is_empty() {
            return Ok(());
        }

        if !storage.claim_hooks::<T>() {
            return Err(AdapterError::HooksOccupied {
                field: type_name::<T>(),
                hook: T::HANDLED
                    .kinds::<FieldHook>()
                    .next()
                    .map_or(FieldHook::OnAdd.name(), |hook| hook.name()),
            });
        }

        if T::handles(FieldHook::OnAdd) {
            storage.connect::<T>(Signal::Construct, listener(T::on_add));
        }
        if T::handles(FieldHook::OnSet) {
            storage.connect::<T>(Signal::Update, listener(T::on_set));
        }
        if T::handles(FieldHook::OnRemove) {
            storage.connect::<T>(Signal::Destroy, listener(T::on_remove));
        }

        Ok(())
    }
}
