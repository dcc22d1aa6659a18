use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::roadmap::Roadmap;

/// Completion state of one roadmap for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapProgress {
    /// Completed topic ids that belong to this roadmap, in roadmap order.
    pub completed_topics: Vec<u32>,
    pub total_topics: usize,
    /// 0.0 – 100.0, one decimal place.
    pub progress_percentage: f64,
}

impl RoadmapProgress {
    /// Ids not present in `roadmap` are ignored, so the percentage never exceeds 100.
    pub fn compute(roadmap: &Roadmap, completed: &BTreeSet<u32>) -> Self {
        let completed_topics: Vec<u32> = roadmap
            .topics()
            .map(|t| t.id)
            .filter(|id| completed.contains(id))
            .collect();
        let total_topics = roadmap.topic_count();
        let progress_percentage = if total_topics > 0 {
            let pct = completed_topics.len() as f64 / total_topics as f64 * 100.0;
            (pct * 10.0).round() / 10.0
        } else {
            0.0
        };

        RoadmapProgress {
            completed_topics,
            total_topics,
            progress_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::{RoadmapPhase, RoadmapTopic};

    fn roadmap_with_ids(ids: &[u32]) -> Roadmap {
        Roadmap::new(vec![RoadmapPhase {
            phase_number: 1,
            phase_name: "Foundation".to_string(),
            description: String::new(),
            estimated_duration: String::new(),
            topics: ids
                .iter()
                .map(|&id| RoadmapTopic {
                    id,
                    topic_name: format!("topic {id}"),
                    topic_order: id,
                    description: String::new(),
                    resource_link: None,
                })
                .collect(),
        }])
    }

    #[test]
    fn test_percentage_rounded_to_one_decimal() {
        let roadmap = roadmap_with_ids(&[1, 2, 3]);
        let progress = RoadmapProgress::compute(&roadmap, &BTreeSet::from([2]));
        assert_eq!(progress.completed_topics, vec![2]);
        assert_eq!(progress.total_topics, 3);
        assert!((progress.progress_percentage - 33.3).abs() < 1e-9);
    }

    #[test]
    fn test_foreign_ids_ignored() {
        let roadmap = roadmap_with_ids(&[1, 2]);
        let progress = RoadmapProgress::compute(&roadmap, &BTreeSet::from([1, 2, 99]));
        assert_eq!(progress.completed_topics, vec![1, 2]);
        assert!((progress.progress_percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_roadmap_is_zero_percent() {
        let progress = RoadmapProgress::compute(&Roadmap::default(), &BTreeSet::from([1]));
        assert_eq!(progress.total_topics, 0);
        assert_eq!(progress.progress_percentage, 0.0);
        assert!(progress.completed_topics.is_empty());
    }
}
