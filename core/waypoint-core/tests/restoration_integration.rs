//! End-to-end restoration flow against the file-backed store.

use tempfile::tempdir;

use waypoint_core::{
    Activity, ActivityId, ActivityKind, FileStore, NavigationReference, NavigationStore,
    StorageConfig, Trip, TripId, TripSession, WaypointError,
};

fn open_store(config: &StorageConfig) -> NavigationStore<FileStore> {
    NavigationStore::new(FileStore::open(&config.navigation_state_file()).unwrap())
}

#[test]
fn view_activity_then_restore_on_reappearance() {
    let temp = tempdir().unwrap();
    let config = StorageConfig::with_root(temp.path().to_path_buf());

    let trip = Trip::new("Japan 2026");
    let activity = Activity::new(&trip, ActivityKind::Transportation, "NRT flight");

    // Viewing the activity saves a reference under the trip's slot.
    let mut store = open_store(&config);
    let reference = NavigationReference::build(&activity, trip.id()).unwrap();
    store.save(trip.id(), &reference).unwrap();

    // Fresh selection of the trip shows the overview.
    let mut session = TripSession::new();
    session.on_trip_presented(trip.id());
    assert!(session.restoration_target().is_none());

    // Tab switch and back: restoration fires.
    session.on_trip_reappeared(&store, trip.id());
    assert_eq!(session.restoration_target(), Some(activity.id()));
}

#[test]
fn restoration_survives_process_restart_but_session_does_not() {
    let temp = tempdir().unwrap();
    let config = StorageConfig::with_root(temp.path().to_path_buf());

    let trip = Trip::new("Norway");
    let activity = Activity::new(&trip, ActivityKind::Lodging, "Bergen hotel");

    {
        let mut store = open_store(&config);
        let reference = NavigationReference::build(&activity, trip.id()).unwrap();
        store.save(trip.id(), &reference).unwrap();
    }

    // "Restart": reopen the store, start a new session. The saved reference
    // is still there, but the appearance flag is not.
    let store = open_store(&config);
    let mut session = TripSession::new();
    session.on_trip_presented(trip.id());
    assert!(session.restoration_target().is_none());

    session.on_trip_reappeared(&store, trip.id());
    assert_eq!(session.restoration_target(), Some(activity.id()));
}

#[test]
fn concrete_save_load_clear_scenario() {
    // Known-value scenario: {A1, transportation, T1} under trip T1.
    let temp = tempdir().unwrap();
    let config = StorageConfig::with_root(temp.path().to_path_buf());
    let trip_id = TripId::new("T1");

    let reference = NavigationReference {
        activity_id: ActivityId::new("A1"),
        activity_type: ActivityKind::Transportation,
        trip_id: trip_id.clone(),
    };

    let mut store = open_store(&config);
    store.save(&trip_id, &reference).unwrap();

    let loaded = store.load(&trip_id).unwrap().unwrap();
    assert_eq!(loaded.activity_id, ActivityId::new("A1"));
    assert_eq!(loaded.activity_type, ActivityKind::Transportation);
    assert_eq!(loaded.trip_id, trip_id);

    store.clear(&trip_id).unwrap();
    assert!(store.load(&trip_id).unwrap().is_none());

    // clear again: still none, still no error
    store.clear(&trip_id).unwrap();
    assert!(store.load(&trip_id).unwrap().is_none());
}

#[test]
fn switching_trips_never_triggers_unsolicited_navigation() {
    let temp = tempdir().unwrap();
    let config = StorageConfig::with_root(temp.path().to_path_buf());

    let trip_a = Trip::new("Japan");
    let trip_b = Trip::new("Norway");
    let activity_a = Activity::new(&trip_a, ActivityKind::Activity, "teamLab tickets");
    let activity_b = Activity::new(&trip_b, ActivityKind::Transportation, "Oslo train");

    let mut store = open_store(&config);
    store
        .save(
            trip_a.id(),
            &NavigationReference::build(&activity_a, trip_a.id()).unwrap(),
        )
        .unwrap();
    store
        .save(
            trip_b.id(),
            &NavigationReference::build(&activity_b, trip_b.id()).unwrap(),
        )
        .unwrap();

    let mut session = TripSession::new();
    session.on_trip_presented(trip_a.id());
    session.on_trip_reappeared(&store, trip_a.id());
    assert_eq!(session.restoration_target(), Some(activity_a.id()));

    // Selecting trip B discards trip A's restoration and must not pick up
    // trip B's saved reference on first presentation.
    session.on_trip_changed(trip_b.id());
    session.on_trip_presented(trip_b.id());
    assert!(session.restoration_target().is_none());

    // Only a reappearance of trip B restores its own reference.
    session.on_trip_reappeared(&store, trip_b.id());
    assert_eq!(session.restoration_target(), Some(activity_b.id()));
}

#[test]
fn corrupt_persisted_value_degrades_to_no_restoration() {
    let temp = tempdir().unwrap();
    let config = StorageConfig::with_root(temp.path().to_path_buf());
    let trip_id = TripId::new("T1");

    {
        let mut store = open_store(&config);
        let reference = NavigationReference {
            activity_id: ActivityId::new("A1"),
            activity_type: ActivityKind::Lodging,
            trip_id: trip_id.clone(),
        };
        store.save(&trip_id, &reference).unwrap();
    }

    // Corrupt the stored value in place.
    let state_file = config.navigation_state_file();
    let content = fs_err::read_to_string(&state_file).unwrap();
    let corrupted = content.replace("lodging", "hotel");
    fs_err::write(&state_file, corrupted).unwrap();

    let store = open_store(&config);
    assert!(matches!(
        store.load(&trip_id),
        Err(WaypointError::MalformedReference { .. })
    ));

    // The session treats it as "no saved state".
    let mut session = TripSession::new();
    session.on_trip_presented(&trip_id);
    session.on_trip_reappeared(&store, &trip_id);
    assert!(session.restoration_target().is_none());
}
