use serde::{Deserialize, Serialize};

/// A school activity. The activity name is the key in the directory,
/// so it is not repeated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}
