use super::host_events::{AllocatorHandle, HostEvent, SceneBeforeLoad, SceneLoad, SceneUnload};

/// The host events of switching from `previous` (if any) to `next`, in
/// delivery order: unload, before-load, load.
pub fn scene_transition<E>(
    previous: Option<&str>,
    next: &str,
    allocator: AllocatorHandle,
) -> Vec<HostEvent<E>> {
    let mut events = Vec::with_capacity(3);

    if let Some(previous) = previous {
        events.push(HostEvent::SceneUnload(SceneUnload {
            name: previous.to_string(),
        }));
    }

    events.push(HostEvent::SceneBeforeLoad(SceneBeforeLoad {
        name: next.to_string(),
        allocator,
    }));
    events.push(HostEvent::SceneLoad(SceneLoad {
        name: next.to_string(),
    }));

    events
}
