use super::Activity;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// An activity together with the name it is keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    pub name: String,
    pub activity: Activity,
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// All activities from the latest fetch, in the order the backend sent them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ActivityCatalog {
    entries: Vec<CatalogEntry>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        ActivityCatalog {
            entries: Vec::new(),
        }
    }

    pub fn get_activities(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Inserts an activity. A name that is already present keeps its position
    /// and takes the new details.
    pub fn add_activity(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.activity = activity,
            None => self.entries.push(CatalogEntry { name, activity }),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(CatalogEntry::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = ActivityCatalog;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of activity names to activity details")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut catalog = ActivityCatalog::new();
        while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
            catalog.add_activity(name, activity);
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatalogVisitor)
    }
}
