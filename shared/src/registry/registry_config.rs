/// What a [`HookRegistry`](crate::HookRegistry) does when a field type is
/// registered a second time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail with `AdapterError::AlreadyRegistered`.
    #[default]
    Reject,
    /// Log a warning and keep the first registration.
    Warn,
    /// Keep the first registration silently.
    Ignore,
}

/// Contains Config properties which will be used by a `HookRegistry`
#[derive(Clone, Debug, Default)]
pub struct RegistryConfig {
    /// Determines how repeated registrations of one field type are handled.
    /// Native hooks are never wired twice, whatever the policy.
    pub duplicates: DuplicatePolicy,
}
