//! Wire representations: HAL envelopes and the health payload

use std::collections::BTreeMap;

use orgdir_domain::Entity;
use orgdir_store::StoreCounts;
use serde::{Deserialize, Serialize};

/// Hyperlink to a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Target address of the link
    pub href: String,
}

/// Link relations attached to a representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Links {
    /// Address of the represented resource itself, usable for subsequent
    /// GET/PUT/DELETE
    #[serde(rename = "self")]
    pub self_link: Link,
}

/// A single record with its self-reference locator
#[derive(Debug, Clone, Serialize)]
pub struct HalItem<T: Serialize> {
    /// Record fields, inlined into the representation
    #[serde(flatten)]
    pub record: T,
    /// Link relations
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T: Entity + Serialize> HalItem<T> {
    /// Wrap a record, deriving its self link from the collection segment.
    pub fn new(segment: &str, record: T) -> Self {
        let href = format!("/{}/{}", segment, record.id());
        Self {
            record,
            links: Links {
                self_link: Link { href },
            },
        }
    }
}

/// A collection snapshot under the HAL `_embedded` envelope
#[derive(Debug, Clone, Serialize)]
pub struct HalCollection<T: Serialize> {
    /// Embedded records, keyed by the collection segment
    #[serde(rename = "_embedded")]
    pub embedded: BTreeMap<&'static str, Vec<HalItem<T>>>,
    /// Link relations
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T: Entity + Serialize> HalCollection<T> {
    /// Wrap a snapshot of records under the collection's embedded key.
    pub fn new(segment: &'static str, records: Vec<T>) -> Self {
        let items = records
            .into_iter()
            .map(|record| HalItem::new(segment, record))
            .collect();
        let mut embedded = BTreeMap::new();
        embedded.insert(segment, items);
        Self {
            embedded,
            links: Links {
                self_link: Link {
                    href: format!("/{}", segment),
                },
            },
        }
    }
}

/// API health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
    /// Record counts per collection
    pub records: StoreCounts,
}
