use std::sync::{Arc, Once};

use pretty_assertions::assert_eq;
use ythub_core::{
    parse_event, update, Columns, Effect, InstanceStatus, ListState, Msg, NotebookStatus,
    StatusCode, StatusRecord, StatusRegistry, StatusRowView, HIGHLIGHT_MS,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ythub_logging::initialize_for_tests);
}

fn record(id: &str, status: i64) -> StatusRecord {
    StatusRecord {
        id: id.to_string(),
        status: StatusCode(status),
        created: Some("2016-05-01T10:00:00Z".to_string()),
        name: Some(format!("tale {id}")),
    }
}

fn loaded_instances(columns: Columns) -> ListState {
    let registry = Arc::new(StatusRegistry::for_kind::<InstanceStatus>());
    let state = ListState::for_kind::<InstanceStatus>(registry, columns);
    let (state, effects) = update(state, Msg::Loaded(vec![record("a", 0), record("b", 1)]));
    assert_eq!(effects, vec![Effect::Render]);
    state
}

#[test]
fn loaded_rows_render_with_registry_metadata() {
    init_logging();
    let state = loaded_instances(Columns::ALL);
    let view = state.view();

    assert_eq!(
        view.rows,
        vec![
            StatusRowView {
                id: "a".to_string(),
                name: Some("tale a".to_string()),
                created: Some("2016-05-01T10:00:00Z".to_string()),
                status: StatusCode(0),
                icon: Some("icon-spin3 animate-spin".to_string()),
                text: Some("Running".to_string()),
                class_affix: "running".to_string(),
                highlighted: false,
            },
            StatusRowView {
                id: "b".to_string(),
                name: Some("tale b".to_string()),
                created: Some("2016-05-01T10:00:00Z".to_string()),
                status: StatusCode(1),
                icon: Some("icon-cancel".to_string()),
                text: Some("Error".to_string()),
                class_affix: "error".to_string(),
                highlighted: false,
            },
        ]
    );
}

#[test]
fn status_change_updates_row_and_schedules_highlight_clear() {
    init_logging();
    let state = loaded_instances(Columns::ALL);
    let event = parse_event(
        r#"{"type": "instance_status", "data": {"_id": "a", "status": 1, "created": "2016-05-02T00:00:00Z"}}"#,
    )
    .unwrap();

    let (state, effects) = update(state, Msg::StatusChanged(event));
    assert_eq!(
        effects,
        vec![Effect::ScheduleHighlightClear {
            id: "a".to_string(),
            after_ms: HIGHLIGHT_MS,
        }]
    );

    let row = state.view().rows[0].clone();
    assert_eq!(row.status, StatusCode(1));
    assert_eq!(row.text.as_deref(), Some("Error"));
    assert_eq!(row.icon.as_deref(), Some("icon-cancel"));
    assert_eq!(row.created.as_deref(), Some("2016-05-02T00:00:00Z"));
    assert!(row.highlighted);

    let (state, effects) = update(state, Msg::HighlightExpired { id: "a".to_string() });
    assert!(effects.is_empty());
    assert!(!state.view().rows[0].highlighted);
}

#[test]
fn status_change_keeps_created_when_event_omits_it() {
    init_logging();
    let state = loaded_instances(Columns::ALL);
    let event = parse_event(r#"{"type": "instance_status", "data": {"_id": "b", "status": 0}}"#)
        .unwrap();

    let (state, _) = update(state, Msg::StatusChanged(event));
    let row = state.row("b").unwrap();
    assert_eq!(row.status, StatusCode(0));
    assert_eq!(row.created.as_deref(), Some("2016-05-01T10:00:00Z"));
}

#[test]
fn unknown_rows_and_foreign_events_are_ignored() {
    init_logging();
    let state = loaded_instances(Columns::ALL);

    let unknown =
        parse_event(r#"{"type": "instance_status", "data": {"_id": "zzz", "status": 1}}"#).unwrap();
    let (next, effects) = update(state.clone(), Msg::StatusChanged(unknown));
    assert!(effects.is_empty());
    assert_eq!(next, state);

    let foreign =
        parse_event(r#"{"type": "notebook_status", "data": {"_id": "a", "status": 2}}"#).unwrap();
    let (next, effects) = update(state.clone(), Msg::StatusChanged(foreign));
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn unregistered_status_degrades_to_raw_code() {
    init_logging();
    let registry = Arc::new(StatusRegistry::for_kind::<NotebookStatus>());
    let state = ListState::for_kind::<NotebookStatus>(registry, Columns::ALL);
    let (state, _) = update(state, Msg::Loaded(vec![record("n", 42)]));

    let row = state.view().rows[0].clone();
    assert_eq!(row.text.as_deref(), Some("42"));
    assert_eq!(row.icon, None);
    assert_eq!(row.class_affix, "42");
}

#[test]
fn disabled_columns_leave_cells_empty() {
    init_logging();
    let columns = Columns::STATUS.union(Columns::NAME);
    let state = loaded_instances(columns);
    let view = state.view();

    assert_eq!(view.columns, columns);
    let row = &view.rows[0];
    assert_eq!(row.text.as_deref(), Some("Running"));
    assert_eq!(row.name.as_deref(), Some("tale a"));
    assert_eq!(row.icon, None);
    assert_eq!(row.created, None);
    assert_eq!(row.class_affix, "running");
}

#[test]
fn removing_a_row_rerenders() {
    init_logging();
    let state = loaded_instances(Columns::ALL);

    let (state, effects) = update(state, Msg::Removed { id: "a".to_string() });
    assert_eq!(effects, vec![Effect::Render]);
    assert_eq!(state.rows().len(), 1);

    let (state, effects) = update(state, Msg::Removed { id: "a".to_string() });
    assert!(effects.is_empty());
    assert_eq!(state.rows().len(), 1);
}

#[test]
fn repeated_ids_collapse_into_one_row() {
    init_logging();
    let registry = Arc::new(StatusRegistry::for_kind::<InstanceStatus>());
    let state = ListState::for_kind::<InstanceStatus>(registry, Columns::ALL);
    let mut renamed = record("a", 1);
    renamed.name = Some("renamed".to_string());
    let (state, _) = update(
        state,
        Msg::Loaded(vec![record("a", 0), record("b", 0), renamed]),
    );

    let ids: Vec<&str> = state.rows().iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(state.row("a").unwrap().status, StatusCode(1));
    assert_eq!(state.row("a").unwrap().name.as_deref(), Some("renamed"));

    let event =
        parse_event(r#"{"type": "instance_status", "data": {"_id": "a", "status": 0}}"#).unwrap();
    let (state, _) = update(state, Msg::StatusChanged(event));
    let texts: Vec<Option<String>> = state.view().rows.into_iter().map(|row| row.text).collect();
    assert_eq!(
        texts,
        vec![Some("Running".to_string()), Some("Running".to_string())]
    );

    let (state, effects) = update(state, Msg::Removed { id: "a".to_string() });
    assert_eq!(effects, vec![Effect::Render]);
    assert_eq!(state.rows().len(), 1);
    assert!(state.row("a").is_none());
}

#[test]
fn columns_flags_compose() {
    assert!(Columns::ALL.contains(Columns::STATUS_ICON));
    assert!(Columns::ALL.contains(Columns::STATUS.union(Columns::CREATED)));
    assert!(!Columns::STATUS.contains(Columns::NAME));
    assert!(Columns::NONE.contains(Columns::NONE));
    assert_eq!(Columns::default(), Columns::ALL);
}
