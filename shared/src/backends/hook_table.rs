use std::{cell::RefCell, rc::Rc};

use crate::world::{
    error::AdapterError,
    field_hooks::{FieldHook, FieldHooks},
    storage::{FieldStore, Storage},
};

use super::{
    fresh_attachments::FreshAttachments,
    signal::{listener, Listener},
    Backend,
};

/// The native hook slots a hook-table engine keeps per field type.
pub struct HookTable<S: Storage> {
    pub on_add: Option<Listener<S>>,
    pub on_set: Option<Listener<S>>,
    pub on_remove: Option<Listener<S>>,
}

impl<S: Storage> Default for HookTable<S> {
    fn default() -> Self {
        Self {
            on_add: None,
            on_set: None,
            on_remove: None,
        }
    }
}

impl<S: Storage> HookTable<S> {
    pub fn is_empty(&self) -> bool {
        self.on_add.is_none() && self.on_set.is_none() && self.on_remove.is_none()
    }

    pub fn slot(&self, hook: FieldHook) -> Option<&Listener<S>> {
        match hook {
            FieldHook::OnAdd => self.on_add.as_ref(),
            FieldHook::OnSet => self.on_set.as_ref(),
            FieldHook::OnRemove => self.on_remove.as_ref(),
        }
    }
}

/// A storage engine holding one table of native hooks per field type.
pub trait HookTableStorage: Storage + Sized {
    /// Whether the engine's native set hook also fires when a field is first
    /// attached, right after the add hook.
    const SET_FIRES_ON_ADD: bool;

    /// Installs the hook table of field type `T`. A table can only be
    /// installed once per field type; a second install fails with
    /// [`AdapterError::HooksOccupied`].
    fn install_hooks<T: 'static>(&mut self, table: HookTable<Self>) -> Result<(), AdapterError>;
}

/// Adapter for [`HookTableStorage`] engines.
pub struct HookTables;

impl<S, T> Backend<S, T> for HookTables
where
    S: HookTableStorage + FieldStore<T>,
    T: FieldHooks<S>,
{
    const FAMILY: &'static str = "hook-table";

    fn wire(storage: &mut S) -> Result<(), AdapterError> {
        if T::HANDLED.is_empty() {
            return Ok(());
        }

        let table = if S::SET_FIRES_ON_ADD && T::handles(FieldHook::OnSet) {
            fresh_tracking_table::<S, T>()
        } else {
            direct_table::<S, T>()
        };

        storage.install_hooks::<T>(table)
    }
}

fn direct_table<S: Storage, T: FieldHooks<S>>() -> HookTable<S> {
    let mut table = HookTable::default();
    if T::handles(FieldHook::OnAdd) {
        table.on_add = Some(listener(T::on_add));
    }
    if T::handles(FieldHook::OnSet) {
        table.on_set = Some(listener(T::on_set));
    }
    if T::handles(FieldHook::OnRemove) {
        table.on_remove = Some(listener(T::on_remove));
    }
    table
}

// The native set that follows a native add is swallowed, so `on_add` and
// `on_remove` slots are always occupied to keep the marks current.
fn fresh_tracking_table<S: Storage, T: FieldHooks<S>>() -> HookTable<S> {
    let fresh = Rc::new(RefCell::new(FreshAttachments::<S::Entity>::new()));

    let on_add = {
        let fresh = fresh.clone();
        listener::<S, _>(move |payload| {
            fresh.borrow_mut().mark(payload.record());
            if T::handles(FieldHook::OnAdd) {
                T::on_add(payload);
            }
        })
    };

    let on_set = {
        let fresh = fresh.clone();
        listener::<S, _>(move |payload| {
            let first_attachment = fresh.borrow_mut().take(&payload.record());
            if !first_attachment {
                T::on_set(payload);
            }
        })
    };

    let on_remove = listener::<S, _>(move |payload| {
        fresh.borrow_mut().take(&payload.record());
        if T::handles(FieldHook::OnRemove) {
            T::on_remove(payload);
        }
    });

    HookTable {
        on_add: Some(on_add),
        on_set: Some(on_set),
        on_remove: Some(on_remove),
    }
}
