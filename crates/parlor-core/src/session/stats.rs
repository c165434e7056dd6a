use super::message::{Role, Turn};
use chrono::{DateTime, Duration, Utc};

/// Counters shown alongside a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub total_turns: usize,
    pub user_turns: usize,
    pub assistant_turns: usize,
    pub system_turns: usize,
    /// Sum of content lengths, in characters
    pub total_chars: usize,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
}

impl SessionStats {
    pub(crate) fn collect(turns: &[Turn], started_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let count = |role: Role| turns.iter().filter(|t| t.role() == role).count();
        Self {
            total_turns: turns.len(),
            user_turns: count(Role::User),
            assistant_turns: count(Role::Assistant),
            system_turns: count(Role::System),
            total_chars: turns.iter().map(|t| t.content().chars().count()).sum(),
            started_at,
            duration: (now - started_at).max(Duration::zero()),
        }
    }

    /// Duration formatted as "3m 07s".
    pub fn duration_label(&self) -> String {
        let secs = self.duration.num_seconds();
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}
