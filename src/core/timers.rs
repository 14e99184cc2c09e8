//! Cooperative timer scheduling.
//!
//! Every component owns a `Scheduler` for the timers it registers (repeating
//! ticks, spawn intervals, delayed notifications). Nothing runs on its own:
//! the main loop measures elapsed wall time and hands it to each component,
//! which drains due tasks one at a time with [`Scheduler::pop_due`] and then
//! settles the clock with [`Scheduler::advance_to`].
//!
//! Popping one task at a time lets a handler cancel or schedule other tasks
//! before anything later in the same window fires. Dropping a scheduler drops
//! its pending tasks, so tearing a component down can never leak a timer.

/// Handle returned when a task is scheduled; pass it to [`Scheduler::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct ScheduledTask<E> {
    id: TimerId,
    due_ms: u64,
    /// `Some` for repeating tasks.
    period_ms: Option<u64>,
    event: E,
}

/// Single-threaded timer queue keyed on a millisecond clock local to its owner.
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<ScheduledTask<E>>,
}

impl<E: Clone> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            tasks: Vec::new(),
        }
    }

    /// Number of tasks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Fire `event` once, `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u64, event: E) -> TimerId {
        self.push(delay_ms, None, event)
    }

    /// Fire `event` every `period_ms`, first after one full period.
    ///
    /// A zero period is treated as 1 ms so a repeating task can never
    /// starve the queue.
    pub fn schedule_repeating(&mut self, period_ms: u64, event: E) -> TimerId {
        let period_ms = period_ms.max(1);
        self.push(period_ms, Some(period_ms), event)
    }

    fn push(&mut self, delay_ms: u64, period_ms: Option<u64>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due_ms: self.now_ms + delay_ms,
            period_ms,
            event,
        });
        id
    }

    /// Cancel a pending task. Returns false if it already fired (one-shot)
    /// or was cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Pop the earliest task due at or before `deadline_ms`.
    ///
    /// The scheduler clock moves to the task's due time so that anything the
    /// handler schedules is relative to when the event logically fired.
    /// Repeating tasks are re-armed one period later. Ties fire in
    /// scheduling order.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<E> {
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= deadline_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id))
            .map(|(i, _)| i)?;

        let due_ms = self.tasks[index].due_ms;
        self.now_ms = self.now_ms.max(due_ms);

        match self.tasks[index].period_ms {
            Some(period) => {
                let task = &mut self.tasks[index];
                task.due_ms += period;
                Some(task.event.clone())
            }
            None => Some(self.tasks.swap_remove(index).event),
        }
    }

    /// Move the clock forward to `deadline_ms` once due tasks are drained.
    pub fn advance_to(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }

    /// Deadline for a window of `elapsed_ms` starting now.
    pub fn deadline_after(&self, elapsed_ms: u64) -> u64 {
        self.now_ms.saturating_add(elapsed_ms)
    }

    /// Drain every event due within the next `elapsed_ms`.
    ///
    /// Only suitable when handling an event never needs to cancel a later
    /// one; otherwise drive `pop_due` directly.
    pub fn drain(&mut self, elapsed_ms: u64) -> Vec<E> {
        let deadline = self.deadline_after(elapsed_ms);
        let mut fired = Vec::new();
        while let Some(event) = self.pop_due(deadline) {
            fired.push(event);
        }
        self.advance_to(deadline);
        fired
    }
}
