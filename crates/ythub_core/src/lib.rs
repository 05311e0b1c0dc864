//! ythub core: status registries, record decoding and the pure list state machine.
mod code;
mod domain;
mod effect;
mod msg;
mod record;
mod registry;
mod state;
mod update;
mod validate;
mod view_model;

pub use code::StatusCode;
pub use domain::{InstanceStatus, NotebookStatus, StatusKind};
pub use effect::{Effect, HIGHLIGHT_MS};
pub use msg::Msg;
pub use record::{
    parse_event, parse_events, parse_records, EventKind, RecordError, StatusEvent, StatusRecord,
};
pub use registry::{RegistryError, StatusDescriptor, StatusEntry, StatusRegistry};
pub use state::{Columns, ListState, StatusRow};
pub use update::update;
pub use validate::{StatusValidator, ValidationError, ValidationHook};
pub use view_model::{ListViewModel, StatusRowView};
