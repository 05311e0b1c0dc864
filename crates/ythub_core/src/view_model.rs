use crate::{Columns, StatusCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    pub columns: Columns,
    pub rows: Vec<StatusRowView>,
}

/// One rendered row. Cells for disabled columns are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRowView {
    pub id: String,
    pub name: Option<String>,
    pub created: Option<String>,
    pub status: StatusCode,
    pub icon: Option<String>,
    pub text: Option<String>,
    pub class_affix: String,
    pub highlighted: bool,
}
