use crate::{StatusCode, StatusEntry};

const ICON_SPIN: &str = "icon-spin3 animate-spin";
const ICON_CANCEL: &str = "icon-cancel";

/// A closed, compile-time set of statuses for one domain.
pub trait StatusKind: Copy + Sized + 'static {
    /// Domain name used in validation messages and event types.
    const DOMAIN: &'static str;
    const ALL: &'static [Self];

    fn code(self) -> StatusCode;
    fn name(self) -> &'static str;
    fn text(self) -> &'static str;
    fn icon(self) -> &'static str;

    fn from_code(code: StatusCode) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.code() == code)
    }

    fn entry(self) -> StatusEntry {
        StatusEntry::new(self.name(), self.code(), self.text(), self.icon())
    }

    fn entries() -> Vec<StatusEntry> {
        Self::ALL.iter().map(|status| status.entry()).collect()
    }
}

/// Notebook session lifecycle, matching the server enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotebookStatus {
    Starting,
    Running,
    Error,
}

impl StatusKind for NotebookStatus {
    const DOMAIN: &'static str = "notebook";
    const ALL: &'static [Self] = &[Self::Starting, Self::Running, Self::Error];

    fn code(self) -> StatusCode {
        match self {
            Self::Starting => StatusCode(0),
            Self::Running => StatusCode(1),
            Self::Error => StatusCode(2),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Starting => "STARTING",
            Self::Running => "RUNNING",
            Self::Error => "ERROR",
        }
    }

    fn text(self) -> &'static str {
        match self {
            Self::Starting => "Starting",
            Self::Running => "Running",
            Self::Error => "Error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Starting | Self::Running => ICON_SPIN,
            Self::Error => ICON_CANCEL,
        }
    }
}

/// Generic instance lifecycle, matching the server enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceStatus {
    Running,
    Error,
}

impl StatusKind for InstanceStatus {
    const DOMAIN: &'static str = "instance";
    const ALL: &'static [Self] = &[Self::Running, Self::Error];

    fn code(self) -> StatusCode {
        match self {
            Self::Running => StatusCode(0),
            Self::Error => StatusCode(1),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Error => "ERROR",
        }
    }

    fn text(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Error => "Error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Running => ICON_SPIN,
            Self::Error => ICON_CANCEL,
        }
    }
}
