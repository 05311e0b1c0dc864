#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A fetch of the list resource completed.
    Loaded(Vec<crate::StatusRecord>),
    /// Event stream pushed a status notification.
    StatusChanged(crate::StatusEvent),
    /// Highlight timer for a row fired.
    HighlightExpired { id: String },
    /// A row was deleted on the server.
    Removed { id: String },
}
