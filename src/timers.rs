use std::time::Duration;

use tokio::time::Instant;

use crate::toast::ToastId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Previous,
    Next,
}

/// Work scheduled to run once at a later instant.
#[derive(Debug, Clone, PartialEq)]
pub enum Deferred {
    DismissToast(ToastId),
    ShiftMonth(MonthStep),
    EndMonthTransition,
    CompleteContactSubmission,
}

/// Single-shot deadlines polled by the event loop.
#[derive(Debug, Default)]
pub struct Timers {
    pending: Vec<(Instant, Deferred)>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, after: Duration, action: Deferred) {
        self.pending.push((now + after, action));
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(due, _)| *due).min()
    }

    /// Removes and returns every action due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<Deferred> {
        let mut due: Vec<(Instant, Deferred)> = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].0 <= now {
                due.push(self.pending.remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, action)| action).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn actions_fire_only_once_due() {
        let mut timers = Timers::new();
        let start = Instant::now();
        timers.schedule(start, Duration::from_millis(300), Deferred::ShiftMonth(MonthStep::Next));

        assert!(timers.take_due(Instant::now()).is_empty());

        tokio::time::advance(Duration::from_millis(300)).await;

        assert_eq!(timers.take_due(Instant::now()), vec![Deferred::ShiftMonth(MonthStep::Next)]);
        assert!(timers.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn due_actions_come_out_earliest_first() {
        let mut timers = Timers::new();
        let start = Instant::now();
        timers.schedule(start, Duration::from_millis(600), Deferred::EndMonthTransition);
        timers.schedule(start, Duration::from_millis(300), Deferred::ShiftMonth(MonthStep::Previous));

        assert_eq!(timers.next_deadline(), Some(start + Duration::from_millis(300)));

        tokio::time::advance(Duration::from_secs(1)).await;

        assert_eq!(
            timers.take_due(Instant::now()),
            vec![Deferred::ShiftMonth(MonthStep::Previous), Deferred::EndMonthTransition]
        );
    }
}
