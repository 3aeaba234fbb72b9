use hookwire_shared::{
    AdapterError, DuplicatePolicy, FieldHook, FieldStore, HookRegistry, HookTables, KindSet,
    Registration, RegistryConfig, Signal, Signals, Storage,
};
use hookwire_test::{init_logging, Health, HookLog, HookWorld, Position, Score, SignalWorld, Tag};

#[test]
fn register_wires_and_records_field_types() {
    init_logging();
    let log = HookLog::new();
    let mut world = SignalWorld::with_host(log.clone());
    let mut registry = HookRegistry::<SignalWorld, Signals>::default();

    assert!(registry.is_empty());
    assert_eq!(registry.register::<Position>(&mut world), Ok(Registration::Wired));
    assert_eq!(registry.register::<Health>(&mut world), Ok(Registration::Wired));

    assert_eq!(registry.len(), 2);
    assert!(registry.is_registered::<Position>());
    assert!(!registry.is_registered::<Score>());

    let health = registry.registration::<Health>().expect("Health is registered");
    assert_eq!(health.family(), "signal");
    assert_eq!(
        health.hooks().collect::<Vec<_>>(),
        vec![FieldHook::OnAdd, FieldHook::OnRemove]
    );
    assert!(!health.is_silent());
    assert!(health.name().ends_with("Health"));

    let record = world.create_record();
    world.add_field(record, Health(3)).expect("add Health");
    log.expect_field::<Health>(FieldHook::OnAdd, record);
    log.expect_empty();
}

#[test]
fn silent_field_types_are_recorded_but_not_wired() {
    let mut world = SignalWorld::new();
    let mut registry = HookRegistry::<SignalWorld, Signals>::default();

    assert_eq!(registry.register::<Tag>(&mut world), Ok(Registration::Silent));

    let tag = registry.registration::<Tag>().expect("Tag is registered");
    assert!(tag.is_silent());
    assert_eq!(tag.handled(), KindSet::EMPTY);
    assert_eq!(world.listener_count::<Tag>(Signal::Construct), 0);
}

#[test]
fn duplicates_are_rejected_by_default() {
    let mut world = SignalWorld::new();
    let mut registry = HookRegistry::<SignalWorld, Signals>::default();

    registry.register::<Position>(&mut world).expect("first registration");
    let second = registry.register::<Position>(&mut world);

    assert_eq!(
        second,
        Err(AdapterError::AlreadyRegistered {
            field: std::any::type_name::<Position>(),
            family: "signal",
        })
    );
    assert_eq!(world.listener_count::<Position>(Signal::Construct), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn tolerated_duplicates_never_wire_twice() {
    init_logging();

    for duplicates in [DuplicatePolicy::Warn, DuplicatePolicy::Ignore] {
        let log = HookLog::new();
        let mut world = SignalWorld::with_host(log.clone());
        let mut registry =
            HookRegistry::<SignalWorld, Signals>::new(RegistryConfig { duplicates });

        registry.register::<Position>(&mut world).expect("first registration");
        assert_eq!(
            registry.register::<Position>(&mut world),
            Ok(Registration::Duplicate)
        );
        assert_eq!(registry.config().duplicates, duplicates);

        let record = world.create_record();
        world.add_field(record, Position::default()).expect("add Position");
        log.expect_field::<Position>(FieldHook::OnAdd, record);
        log.expect_empty();
    }
}

#[test]
fn occupied_native_hooks_are_not_recorded() {
    let mut world = HookWorld::<true>::new();
    let mut first = HookRegistry::<HookWorld, HookTables>::default();
    let mut second = HookRegistry::<HookWorld, HookTables>::default();

    assert_eq!(first.register::<Score>(&mut world), Ok(Registration::Wired));
    assert!(matches!(
        second.register::<Score>(&mut world),
        Err(AdapterError::HooksOccupied { .. })
    ));
    assert!(!second.is_registered::<Score>());
}

#[test]
fn second_registry_cannot_rewire_signals() {
    let log = HookLog::new();
    let mut world = SignalWorld::with_host(log.clone());
    let mut first = HookRegistry::<SignalWorld, Signals>::default();
    let mut second = HookRegistry::<SignalWorld, Signals>::default();

    assert_eq!(first.register::<Position>(&mut world), Ok(Registration::Wired));
    assert!(matches!(
        second.register::<Position>(&mut world),
        Err(AdapterError::HooksOccupied { .. })
    ));
    assert!(!second.is_registered::<Position>());

    let record = world.create_record();
    world.add_field(record, Position::default()).expect("add Position");
    log.expect_field::<Position>(FieldHook::OnAdd, record);
    log.expect_empty();
}

#[test]
fn iteration_follows_registration_order() {
    let mut world = HookWorld::<true>::new();
    let mut registry = HookRegistry::<HookWorld, HookTables>::default();

    registry.register::<Score>(&mut world).expect("Score");
    registry.register::<Tag>(&mut world).expect("Tag");
    registry.register::<Position>(&mut world).expect("Position");

    let names: Vec<&str> = registry
        .iter()
        .map(|registration| registration.kind().short_name())
        .collect();
    assert_eq!(names, vec!["Score", "Tag", "Position"]);
    assert!(registry.iter().all(|registration| registration.family() == "hook-table"));
}

#[test]
fn default_config_rejects_duplicates() {
    assert_eq!(RegistryConfig::default().duplicates, DuplicatePolicy::Reject);
}
