use std::{any::type_name, marker::PhantomData};

use bevy_ecs::{
    component::{ComponentHooks, HookContext, Mutable},
    prelude::{Component, Entity, Resource, World},
    world::DeferredWorld,
};

use crate::world::{
    component_payload::ComponentPayload,
    error::{AdapterError, StorageError},
    field_hooks::{FieldHook, FieldHooks},
    storage::{FieldStore, Storage},
};

use super::{fresh_attachments::FreshAttachments, Backend};

impl Storage for World {
    type Entity = Entity;
    type Host<'a> = DeferredWorld<'a>;

    fn create_record(&mut self) -> Entity {
        self.spawn_empty().id()
    }

    fn destroy_record(&mut self, record: Entity) -> Result<(), StorageError> {
        if !self.entities().contains(record) {
            return Err(StorageError::no_such_record(record));
        }
        self.despawn(record);
        Ok(())
    }

    fn record_exists(&self, record: Entity) -> bool {
        self.entities().contains(record)
    }
}

impl<T: Component<Mutability = Mutable>> FieldStore<T> for World {
    fn add_field(&mut self, record: Entity, value: T) -> Result<(), StorageError> {
        let mut entity = self
            .get_entity_mut(record)
            .map_err(|_| StorageError::no_such_record(record))?;
        if entity.contains::<T>() {
            return Err(StorageError::field_already_present(record, type_name::<T>()));
        }
        entity.insert(value);
        Ok(())
    }

    fn replace_field(&mut self, record: Entity, value: T) -> Result<(), StorageError> {
        let mut entity = self
            .get_entity_mut(record)
            .map_err(|_| StorageError::no_such_record(record))?;
        if !entity.contains::<T>() {
            return Err(StorageError::field_missing(record, type_name::<T>()));
        }
        entity.insert(value);
        Ok(())
    }

    fn get_field(&self, record: Entity) -> Option<&T> {
        self.get::<T>(record)
    }

    fn get_field_mut(&mut self, record: Entity) -> Option<&mut T> {
        self.get_mut::<T>(record).map(|value| value.into_inner())
    }

    fn has_field(&self, record: Entity) -> bool {
        self.get::<T>(record).is_some()
    }

    fn remove_field(&mut self, record: Entity) -> Option<T> {
        self.get_entity_mut(record).ok()?.take::<T>()
    }
}

/// Adapter for bevy_ecs component hooks.
///
/// bevy runs `on_insert` on every insert, including the first, so when `T`
/// handles `on_set` the records freshly given `T` are tracked in a
/// per-field-type resource and the `on_insert` right after `on_add` is
/// swallowed.
///
/// Component hooks can only be registered before `T` is stored on any
/// entity: wiring a field type that is already in use fails with
/// [`AdapterError::FieldInUse`]. Wiring is all or nothing.
pub struct BevyHooks;

impl<T> Backend<World, T> for BevyHooks
where
    T: Component<Mutability = Mutable> + FieldHooks<World>,
{
    const FAMILY: &'static str = "bevy";

    fn wire(world: &mut World) -> Result<(), AdapterError> {
        if T::HANDLED.is_empty() {
            return Ok(());
        }

        if let Some(id) = world.component_id::<T>() {
            if world.archetypes().iter().any(|archetype| archetype.contains(id)) {
                return Err(AdapterError::FieldInUse {
                    field: type_name::<T>(),
                });
            }
        }

        let track_fresh = T::handles(FieldHook::OnSet);

        // An occupied slot leaves every hook untouched.
        let hooks = world.register_component_hooks::<T>();
        let mut staged = hooks.clone();
        if T::handles(FieldHook::OnAdd) || track_fresh {
            occupied::<T>(staged.try_on_add(on_add::<T>), "on_add")?;
        }
        if track_fresh {
            occupied::<T>(staged.try_on_insert(on_insert::<T>), "on_insert")?;
        }
        if T::handles(FieldHook::OnRemove) || track_fresh {
            occupied::<T>(staged.try_on_remove(on_remove::<T>), "on_remove")?;
        }
        *hooks = staged;

        if track_fresh {
            world.init_resource::<FreshInserts<T>>();
        }

        Ok(())
    }
}

fn occupied<T>(slot: Option<&mut ComponentHooks>, hook: &'static str) -> Result<(), AdapterError> {
    match slot {
        Some(_) => Ok(()),
        None => Err(AdapterError::HooksOccupied {
            field: type_name::<T>(),
            hook,
        }),
    }
}

struct FreshInserts<T> {
    records: FreshAttachments<Entity>,
    phantom_t: PhantomData<fn() -> T>,
}

impl<T> Default for FreshInserts<T> {
    fn default() -> Self {
        Self {
            records: FreshAttachments::new(),
            phantom_t: PhantomData,
        }
    }
}

impl<T: 'static> Resource for FreshInserts<T> {}

fn on_add<T: FieldHooks<World>>(mut world: DeferredWorld, context: HookContext) {
    if T::handles(FieldHook::OnSet) {
        if let Some(mut fresh) = world.get_resource_mut::<FreshInserts<T>>() {
            fresh.records.mark(context.entity);
        }
    }
    if T::handles(FieldHook::OnAdd) {
        T::on_add(ComponentPayload::new(context.entity, world));
    }
}

fn on_insert<T: FieldHooks<World>>(mut world: DeferredWorld, context: HookContext) {
    let first_attachment = world
        .get_resource_mut::<FreshInserts<T>>()
        .map(|mut fresh| fresh.records.take(&context.entity))
        .unwrap_or(false);
    if !first_attachment {
        T::on_set(ComponentPayload::new(context.entity, world));
    }
}

fn on_remove<T: FieldHooks<World>>(mut world: DeferredWorld, context: HookContext) {
    if let Some(mut fresh) = world.get_resource_mut::<FreshInserts<T>>() {
        fresh.records.take(&context.entity);
    }
    if T::handles(FieldHook::OnRemove) {
        T::on_remove(ComponentPayload::new(context.entity, world));
    }
}
