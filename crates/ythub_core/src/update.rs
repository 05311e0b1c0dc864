use ythub_logging::ythub_trace;

use crate::{Effect, ListState, Msg, HIGHLIGHT_MS};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ListState, msg: Msg) -> (ListState, Vec<Effect>) {
    let effects = match msg {
        Msg::Loaded(records) => {
            state.replace_rows(records);
            vec![Effect::Render]
        }
        Msg::StatusChanged(event) => {
            if event.kind != *state.event_kind() {
                ythub_trace!("ignoring {:?} event in {:?} list", event.kind, state.event_kind());
                return (state, Vec::new());
            }
            let id = event.data.id.clone();
            if state.apply_status(event.data) {
                vec![Effect::ScheduleHighlightClear {
                    id,
                    after_ms: HIGHLIGHT_MS,
                }]
            } else {
                ythub_trace!("status change for unlisted row {}", id);
                Vec::new()
            }
        }
        Msg::HighlightExpired { id } => {
            state.clear_highlight(&id);
            Vec::new()
        }
        Msg::Removed { id } => {
            if state.remove_row(&id) {
                vec![Effect::Render]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}
