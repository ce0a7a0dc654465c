use serde::{Deserialize, Serialize};

/// Candidate stages in the recruitment pipeline. The board renders one
/// column per stage, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Applied,
    Review,
    Interview,
    Offer,
    Rejected,
}

/// Stage metadata for display purposes.
#[derive(Debug, Clone, Serialize)]
pub struct StageInfo {
    pub id: Stage,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Applied,
        Stage::Review,
        Stage::Interview,
        Stage::Offer,
        Stage::Rejected,
    ];

    pub fn info(self) -> StageInfo {
        match self {
            Stage::Applied => StageInfo {
                id: self,
                label: "Applied",
                description: "New applications awaiting initial review",
                color: "stage-applied",
            },
            Stage::Review => StageInfo {
                id: self,
                label: "Under Review",
                description: "Applications being evaluated by the hiring team",
                color: "stage-review",
            },
            Stage::Interview => StageInfo {
                id: self,
                label: "Interview",
                description: "Candidates in the interview process",
                color: "stage-interview",
            },
            Stage::Offer => StageInfo {
                id: self,
                label: "Offer",
                description: "Candidates who have received an offer",
                color: "stage-offer",
            },
            Stage::Rejected => StageInfo {
                id: self,
                label: "Rejected",
                description: "Candidates who were not selected",
                color: "stage-rejected",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stage_has_display_metadata() {
        for stage in Stage::ALL {
            let info = stage.info();
            assert!(!info.label.is_empty());
            assert!(!info.description.is_empty());
            assert!(info.color.starts_with("stage-"));
        }
    }

    #[test]
    fn test_stage_colors_are_distinct() {
        let colors: Vec<&str> = Stage::ALL.iter().map(|s| s.info().color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_stage_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Stage::Applied).unwrap(), r#""applied""#);
        let stage: Stage = serde_json::from_str(r#""interview""#).unwrap();
        assert_eq!(stage, Stage::Interview);
    }
}
