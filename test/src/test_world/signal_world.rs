use std::{
    any::Any,
    collections::{HashMap, HashSet},
};

use hookwire_shared::{
    ComponentPayload, FieldKind, FieldStore, HostHandle, Listener, Signal, SignalStorage,
    Storage, StorageError,
};

use log::trace;

use crate::helpers::HookLog;

use super::{host_handle, MockStorage, Records, TestEntity};

/// A storage engine in the signal/connect style: per field type, any number
/// of listeners connect to construct, update and destroy signals.
///
/// Signals fire after a field is attached or replaced, and before it is
/// removed. Destroying a record publishes `Destroy` for each attached field
/// type in attachment order.
#[derive(Default)]
pub struct SignalWorld {
    records: Records,
    host: Option<Box<dyn Any>>,
    signals: HashMap<(FieldKind, Signal), Vec<Listener<SignalWorld>>>,
    claimed: HashSet<FieldKind>,
}

impl SignalWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host<H: Any>(host: H) -> Self {
        let mut world = Self::new();
        world.attach_host(host);
        world
    }

    /// Number of listeners connected to `signal` of field type `T`.
    pub fn listener_count<T: 'static>(&self, signal: Signal) -> usize {
        self.signals
            .get(&(FieldKind::of::<T>(), signal))
            .map_or(0, Vec::len)
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    fn publish(&mut self, kind: FieldKind, signal: Signal, record: TestEntity) {
        let host = host_handle(&self.host);
        if let Some(listeners) = self.signals.get_mut(&(kind, signal)) {
            for listener in listeners.iter_mut() {
                listener(ComponentPayload::new(record, host));
            }
        }
    }
}

impl Storage for SignalWorld {
    type Entity = TestEntity;
    type Host<'a> = HostHandle<'a>;

    fn create_record(&mut self) -> TestEntity {
        self.records.create()
    }

    fn destroy_record(&mut self, record: TestEntity) -> Result<(), StorageError> {
        if !self.records.exists(record) {
            return Err(StorageError::no_such_record(record));
        }
        let fields = self.records.fields(record);
        trace!("Destroying {} with {} attached fields", record, fields.len());
        for kind in fields {
            self.publish(kind, Signal::Destroy, record);
        }
        self.records.destroy(record)
    }

    fn record_exists(&self, record: TestEntity) -> bool {
        self.records.exists(record)
    }
}

impl<T: 'static> FieldStore<T> for SignalWorld {
    fn add_field(&mut self, record: TestEntity, value: T) -> Result<(), StorageError> {
        self.records.add(record, value)?;
        self.publish(FieldKind::of::<T>(), Signal::Construct, record);
        Ok(())
    }

    fn replace_field(&mut self, record: TestEntity, value: T) -> Result<(), StorageError> {
        self.records.replace(record, value)?;
        self.publish(FieldKind::of::<T>(), Signal::Update, record);
        Ok(())
    }

    fn get_field(&self, record: TestEntity) -> Option<&T> {
        self.records.get(record)
    }

    fn get_field_mut(&mut self, record: TestEntity) -> Option<&mut T> {
        self.records.get_mut(record)
    }

    fn has_field(&self, record: TestEntity) -> bool {
        self.records.has::<T>(record)
    }

    fn remove_field(&mut self, record: TestEntity) -> Option<T> {
        if !self.records.has::<T>(record) {
            return None;
        }
        self.publish(FieldKind::of::<T>(), Signal::Destroy, record);
        self.records.remove(record)
    }
}

impl SignalStorage for SignalWorld {
    fn connect<T: 'static>(&mut self, signal: Signal, listener: Listener<Self>) {
        self.signals
            .entry((FieldKind::of::<T>(), signal))
            .or_default()
            .push(listener);
    }

    fn claim_hooks<T: 'static>(&mut self) -> bool {
        self.claimed.insert(FieldKind::of::<T>())
    }
}

impl MockStorage for SignalWorld {
    fn attach_host<H: Any>(&mut self, host: H) {
        self.host = Some(Box::new(host));
    }

    fn detach_host(&mut self) {
        self.host = None;
    }

    fn hook_log<'a>(host: &Self::Host<'a>) -> Option<&'a HookLog> {
        host.get::<HookLog>().ok()
    }
}
