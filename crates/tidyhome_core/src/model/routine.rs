//! Routine records.
//!
//! Routines are persisted alongside tasks but no core computation reads
//! them; the store keeps them as pass-through state.

use super::task::TaskId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineType {
    /// Days spent at home.
    Home,
    /// Days working away from home.
    Work,
    Weekend,
}

impl RoutineType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Weekend => "weekend",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RoutineType,
    /// Ordered task references; may include ids of deleted tasks.
    pub task_ids: Vec<TaskId>,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::RoutineType;

    #[test]
    fn as_str_matches_wire_name() {
        for kind in [RoutineType::Home, RoutineType::Work, RoutineType::Weekend] {
            let wire = serde_json::to_value(kind).unwrap();
            assert_eq!(wire, kind.as_str());
        }
    }
}
