/// How long a row stays highlighted after a status change.
pub const HIGHLIGHT_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Rows were replaced or removed; redraw the list.
    Render,
    /// Send `Msg::HighlightExpired { id }` back after `after_ms`.
    ScheduleHighlightClear { id: String, after_ms: u64 },
}
