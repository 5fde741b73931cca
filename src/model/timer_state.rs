use std::time::{Duration, SystemTime};

#[derive(Clone, Debug)]
pub struct TimerState {
    pub started_timestamp: SystemTime,
    pub ended_timestamp: Option<SystemTime>,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::started_at(SystemTime::now())
    }
}

impl TimerState {
    pub fn started_at(started_timestamp: SystemTime) -> Self {
        Self {
            started_timestamp,
            ended_timestamp: None,
        }
    }

    #[cfg(test)]
    pub fn is_ended(&self) -> bool {
        self.ended_timestamp.is_some()
    }

    /// Elapsed time up to `now`, or up to the end timestamp once the timer has ended.
    pub fn elapsed_at(&self, now: SystemTime) -> Duration {
        self.ended_timestamp
            .unwrap_or(now)
            .duration_since(self.started_timestamp)
            .unwrap_or(Duration::default())
    }

    #[cfg(test)]
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(SystemTime::now())
    }

    pub fn elapsed_seconds_at(&self, now: SystemTime) -> u64 {
        self.elapsed_at(now).as_secs()
    }

    pub fn ended(&self, now: SystemTime) -> TimerState {
        let mut new_state = self.clone();
        new_state.ended_timestamp = Some(now);
        new_state
    }
}
