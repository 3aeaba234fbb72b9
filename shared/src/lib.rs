//! # Hookwire Shared
//! Lifecycle event dispatch for a host and its plugins, and adapters that
//! deliver storage-engine field hooks through one uniform contract.
//!
//! Handlers are bound to events when the crate is built: dispatch is a mask
//! test followed by a direct call, with no runtime table in between.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

mod backends;
mod dispatch;
mod events;
mod kind_set;
mod registry;
mod world;

pub use backends::{
    fresh_attachments::FreshAttachments,
    hook_table::{HookTable, HookTableStorage, HookTables},
    signal::{listener, Listener, Signal, SignalStorage, Signals},
    Backend,
};
pub use dispatch::{dispatcher::Dispatcher, receiver::Receiver};
pub use events::{
    error::FrameClockError,
    frame_clock::FrameClock,
    host_events::{
        AllocatorHandle, EntityCreated, EntityDestroyed, FrameEnd, FrameStart, GameDeinit,
        GameInit, HostEvent, HostHooks, HostKind, SceneBeforeLoad, SceneLoad, SceneUnload,
    },
    scene::scene_transition,
    Event, EventKind, Route,
};
pub use kind_set::KindSet;
pub use registry::{
    hook_registry::{FieldRegistration, HookRegistry, Registration},
    registry_config::{DuplicatePolicy, RegistryConfig},
};
pub use world::{
    component_payload::{ComponentPayload, HostHandle},
    error::{AdapterError, HostHandleError, StorageError},
    field_hooks::{FieldHook, FieldHooks},
    field_kind::FieldKind,
    storage::{FieldStore, PayloadOf, RecordOf, Storage},
};

cfg_if! {
    if #[cfg(feature = "bevy_support")] {
        pub use backends::bevy::BevyHooks;
    }
}
