use std::sync::Arc;

use crate::view_model::{ListViewModel, StatusRowView};
use crate::{EventKind, StatusCode, StatusKind, StatusRecord, StatusRegistry};

/// Which cells a list renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Columns(u8);

impl Columns {
    pub const NONE: Self = Self(0);
    pub const STATUS_ICON: Self = Self(1 << 0);
    pub const NAME: Self = Self(1 << 1);
    pub const CREATED: Self = Self(1 << 2);
    pub const STATUS: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self::ALL
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub id: String,
    pub name: Option<String>,
    pub created: Option<String>,
    pub status: StatusCode,
    pub highlighted: bool,
}

impl From<StatusRecord> for StatusRow {
    fn from(record: StatusRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            created: record.created,
            status: record.status,
            highlighted: false,
        }
    }
}

/// Rows of one status list plus the registry used to render them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    event_kind: EventKind,
    registry: Arc<StatusRegistry>,
    columns: Columns,
    rows: Vec<StatusRow>,
}

impl ListState {
    pub fn new(event_kind: EventKind, registry: Arc<StatusRegistry>, columns: Columns) -> Self {
        Self {
            event_kind,
            registry,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn for_kind<K: StatusKind>(registry: Arc<StatusRegistry>, columns: Columns) -> Self {
        Self::new(EventKind::for_domain(K::DOMAIN), registry, columns)
    }

    pub fn event_kind(&self) -> &EventKind {
        &self.event_kind
    }

    pub fn registry(&self) -> &StatusRegistry {
        &self.registry
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn rows(&self) -> &[StatusRow] {
        &self.rows
    }

    pub fn row(&self, id: &str) -> Option<&StatusRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// One row per id: a repeated id keeps its first position and takes the
    /// fields of its last record.
    pub(crate) fn replace_rows(&mut self, records: Vec<StatusRecord>) {
        let mut rows: Vec<StatusRow> = Vec::with_capacity(records.len());
        for record in records {
            match rows.iter_mut().find(|row| row.id == record.id) {
                Some(existing) => *existing = StatusRow::from(record),
                None => rows.push(StatusRow::from(record)),
            }
        }
        self.rows = rows;
    }

    /// Applies a pushed status change; returns false when the id is not listed.
    pub(crate) fn apply_status(&mut self, record: StatusRecord) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == record.id) else {
            return false;
        };
        row.status = record.status;
        if record.created.is_some() {
            row.created = record.created;
        }
        row.highlighted = true;
        true
    }

    pub(crate) fn clear_highlight(&mut self, id: &str) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.highlighted = false;
        }
    }

    pub(crate) fn remove_row(&mut self, id: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    pub fn view(&self) -> ListViewModel {
        let columns = self.columns;
        let registry = &self.registry;
        let rows = self
            .rows
            .iter()
            .map(|row| StatusRowView {
                id: row.id.clone(),
                name: columns
                    .contains(Columns::NAME)
                    .then(|| row.name.clone())
                    .flatten(),
                created: columns
                    .contains(Columns::CREATED)
                    .then(|| row.created.clone())
                    .flatten(),
                status: row.status,
                icon: columns
                    .contains(Columns::STATUS_ICON)
                    .then(|| registry.icon(row.status).map(ToOwned::to_owned))
                    .flatten(),
                text: columns
                    .contains(Columns::STATUS)
                    .then(|| registry.text(row.status).into_owned()),
                class_affix: registry.class_affix(row.status),
                highlighted: row.highlighted,
            })
            .collect();

        ListViewModel { columns, rows }
    }
}
