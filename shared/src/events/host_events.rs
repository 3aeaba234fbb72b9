use std::{
    any::{type_name, Any},
    fmt,
    sync::Arc,
};

use crate::{hook_events, world::error::HostHandleError};

/// Shared, type-erased handle to an allocator or arena owned by the host.
///
/// Plugins that know the host's allocator type recover it with
/// [`AllocatorHandle::downcast`]; everyone else passes it along untouched.
#[derive(Clone)]
pub struct AllocatorHandle {
    inner: Arc<dyn Any + Send + Sync>,
}

impl AllocatorHandle {
    pub fn new<A: Any + Send + Sync>(allocator: A) -> Self {
        Self {
            inner: Arc::new(allocator),
        }
    }

    pub fn from_arc<A: Any + Send + Sync>(allocator: Arc<A>) -> Self {
        Self { inner: allocator }
    }

    pub fn downcast<A: Any>(&self) -> Result<&A, HostHandleError> {
        self.inner
            .downcast_ref::<A>()
            .ok_or(HostHandleError::TypeMismatch {
                expected: type_name::<A>(),
            })
    }

    pub fn is<A: Any>(&self) -> bool {
        self.inner.is::<A>()
    }
}

impl fmt::Debug for AllocatorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AllocatorHandle(..)")
    }
}

// GameInit
#[derive(Clone, Debug)]
pub struct GameInit {
    pub allocator: AllocatorHandle,
}

// GameDeinit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameDeinit;

// FrameStart
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStart {
    /// Monotonic frame counter, starting at zero.
    pub frame: u64,
    /// Seconds elapsed since the previous frame started.
    pub delta: f32,
}

// FrameEnd
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameEnd {
    pub frame: u64,
    pub delta: f32,
}

// SceneBeforeLoad
#[derive(Clone, Debug)]
pub struct SceneBeforeLoad {
    pub name: String,
    pub allocator: AllocatorHandle,
}

// SceneLoad
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneLoad {
    pub name: String,
}

// SceneUnload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneUnload {
    pub name: String,
}

// EntityCreated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityCreated<E> {
    pub entity: E,
    /// Name of the template the entity was instantiated from, if any.
    pub template: Option<String>,
}

impl<E> EntityCreated<E> {
    pub fn new(entity: E) -> Self {
        Self {
            entity,
            template: None,
        }
    }

    pub fn from_template(entity: E, template: impl Into<String>) -> Self {
        Self {
            entity,
            template: Some(template.into()),
        }
    }
}

// EntityDestroyed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityDestroyed<E> {
    pub entity: E,
    pub template: Option<String>,
}

impl<E> EntityDestroyed<E> {
    pub fn new(entity: E) -> Self {
        Self {
            entity,
            template: None,
        }
    }

    pub fn from_template(entity: E, template: impl Into<String>) -> Self {
        Self {
            entity,
            template: Some(template.into()),
        }
    }
}

hook_events! {
    /// Lifecycle events of the host application.
    ///
    /// `E` is the record identity of the storage engine the host runs on.
    #[derive(Clone, Debug)]
    pub enum HostEvent<E> {
        kind: HostKind,
        hooks: HostHooks,
        GameInit(GameInit) => game_init,
        GameDeinit(GameDeinit) => game_deinit,
        FrameStart(FrameStart) => frame_start,
        FrameEnd(FrameEnd) => frame_end,
        SceneBeforeLoad(SceneBeforeLoad) => scene_before_load,
        SceneLoad(SceneLoad) => scene_load,
        SceneUnload(SceneUnload) => scene_unload,
        EntityCreated(EntityCreated<E>) => entity_created,
        EntityDestroyed(EntityDestroyed<E>) => entity_destroyed,
    }
}

impl<E> HostEvent<E> {
    pub fn game_init(allocator: AllocatorHandle) -> Self {
        Self::GameInit(GameInit { allocator })
    }

    pub fn entity_created(entity: E) -> Self {
        Self::EntityCreated(EntityCreated::new(entity))
    }

    pub fn entity_destroyed(entity: E) -> Self {
        Self::EntityDestroyed(EntityDestroyed::new(entity))
    }
}
