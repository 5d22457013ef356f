//! Fixed four-level classification tree:
//! `Demand → Project → Activity → Behavior → [Episode]`.
//!
//! Every level is an [`OrderedMap`] so sibling names stay unique and keep
//! their insertion order when the document is written back to disk.

use clap::ValueEnum;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Appends `key` unless it is already present. Returns whether it was added.
    pub fn insert_if_absent(&mut self, key: &str, value: V) -> bool {
        if self.contains_key(key) {
            return false;
        }
        self.entries.push((key.to_string(), value));
        true
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, v)| v)
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut out = OrderedMap::new();
        // Duplicate keys: first occurrence wins.
        while let Some((k, v)) = access.next_entry::<String, V>()? {
            out.insert_if_absent(&k, v);
        }
        Ok(out)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

pub type Episodes = Vec<String>;
pub type Behaviors = OrderedMap<Episodes>;
pub type ActivityTypes = OrderedMap<Behaviors>;
pub type Projects = OrderedMap<ActivityTypes>;
pub type Demands = OrderedMap<Projects>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    pub demands: Demands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Level {
    Demand,
    Project,
    Activity,
    Behavior,
    Episode,
}

impl Level {
    /// Number of ancestor names needed to address a node of this level.
    pub fn depth(&self) -> usize {
        match self {
            Level::Demand => 0,
            Level::Project => 1,
            Level::Activity => 2,
            Level::Behavior => 3,
            Level::Episode => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Demand => "demand",
            Level::Project => "project",
            Level::Activity => "activity",
            Level::Behavior => "behavior",
            Level::Episode => "episode",
        }
    }

    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            0 => Some(Level::Demand),
            1 => Some(Level::Project),
            2 => Some(Level::Activity),
            3 => Some(Level::Behavior),
            4 => Some(Level::Episode),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
