//! Learning roadmaps — ordered phases of topics attached to each catalog role.

pub mod progress;
pub mod resources;

use serde::{Deserialize, Serialize};

use crate::roadmap::resources::resource_link;

/// A single topic inside a roadmap phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapTopic {
    /// Catalog-wide identifier, assigned when the catalog is built.
    #[serde(default)]
    pub id: u32,
    pub topic_name: String,
    #[serde(default)]
    pub topic_order: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub resource_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    #[serde(default)]
    pub phase_number: u32,
    pub phase_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub estimated_duration: String,
    #[serde(default)]
    pub topics: Vec<RoadmapTopic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roadmap {
    pub phases: Vec<RoadmapPhase>,
}

impl Roadmap {
    pub fn new(phases: Vec<RoadmapPhase>) -> Self {
        Self { phases }
    }

    pub fn topics(&self) -> impl Iterator<Item = &RoadmapTopic> {
        self.phases.iter().flat_map(|p| p.topics.iter())
    }

    pub fn topic_count(&self) -> usize {
        self.phases.iter().map(|p| p.topics.len()).sum()
    }

    /// Renumbers phases and topics by position (1-based) and assigns topic ids
    /// starting at `next_id`. Returns the next free id.
    pub(crate) fn assign_ids(&mut self, mut next_id: u32) -> u32 {
        for (phase_idx, phase) in self.phases.iter_mut().enumerate() {
            phase.phase_number = position(phase_idx);
            for (topic_idx, topic) in phase.topics.iter_mut().enumerate() {
                topic.topic_order = position(topic_idx);
                topic.id = next_id;
                next_id += 1;
            }
        }
        next_id
    }

    /// Returns a copy where every topic without a resource link gets one from
    /// the resource lookup table.
    pub fn with_resource_links(&self) -> Self {
        let mut linked = self.clone();
        for topic in linked.phases.iter_mut().flat_map(|p| p.topics.iter_mut()) {
            let missing = topic
                .resource_link
                .as_deref()
                .map(str::is_empty)
                .unwrap_or(true);
            if missing {
                topic.resource_link = Some(resource_link(&topic.topic_name).to_string());
            }
        }
        linked
    }
}

fn position(idx: usize) -> u32 {
    u32::try_from(idx + 1).unwrap_or(u32::MAX)
}
