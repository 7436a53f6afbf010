// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A pre-constructed database client
///
/// Connections are opened by whoever builds the client at process startup;
/// this crate only passes the handle along.
pub trait Database: Any + Send + Sync + fmt::Debug {
    /// Short name for logs, e.g. `"primary"` or `"replica"`
    fn label(&self) -> &str;
}

/// Shared handle to a [`Database`]
///
/// Cloning a handle is cheap and yields the same client.
#[derive(Clone)]
pub struct DbHandle(Arc<dyn Database>);

impl DbHandle {
    /// Wraps a database client
    pub fn new(database: impl Database) -> Self {
        Self(Arc::new(database))
    }

    /// Wraps an already shared client
    pub fn from_arc(database: Arc<dyn Database>) -> Self {
        Self(database)
    }

    pub fn label(&self) -> &str {
        self.0.label()
    }

    /// The concrete client, when it is a `T`
    pub fn downcast_ref<T: Database>(&self) -> Option<&T> {
        let database: &dyn Any = &*self.0;
        database.downcast_ref::<T>()
    }

    /// Whether both handles point at the same client
    pub fn same_client(&self, other: &DbHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for DbHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DbHandle").field(&self.label()).finish()
    }
}
