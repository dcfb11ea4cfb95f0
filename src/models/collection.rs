//! Named collections and the secondary indexes each one carries.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Events,
    Tasks,
    Categories,
    Settings,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Events,
        Collection::Tasks,
        Collection::Categories,
        Collection::Settings,
    ];

    /// Collection name, also used as the SQLite table name.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::Tasks => "tasks",
            Collection::Categories => "categories",
            Collection::Settings => "settings",
        }
    }

    /// Column holding the record key.
    pub fn key_column(&self) -> &'static str {
        match self {
            Collection::Settings => "key",
            _ => "id",
        }
    }

    pub fn indexes(&self) -> &'static [Index] {
        match self {
            Collection::Events => &[Index::Date, Index::Category],
            Collection::Tasks => &[Index::DueDate, Index::Category, Index::Status],
            Collection::Categories | Collection::Settings => &[],
        }
    }

    pub fn has_index(&self, index: Index) -> bool {
        self.indexes().contains(&index)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Secondary lookup on a non-key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index {
    Date,
    DueDate,
    Category,
    Status,
}

impl Index {
    /// Index name as exposed to callers (record field name).
    pub fn name(&self) -> &'static str {
        match self {
            Index::Date => "date",
            Index::DueDate => "dueDate",
            Index::Category => "category",
            Index::Status => "status",
        }
    }

    /// Backing column in the collection table.
    pub fn column(&self) -> &'static str {
        match self {
            Index::Date => "date",
            Index::DueDate => "due_date",
            Index::Category => "category",
            Index::Status => "status",
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
