use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;
use yew_hooks::use_unmount;

use crate::error::SubmissionError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitted,
}

/// One scheduled reset, tagged with the submission that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Armed {
    pub generation: u64,
    pub delay_ms: u32,
    pub expires_at: f64,
}

/// Hands out reset tickets. Only the most recent ticket may return the
/// notice to idle; anything older is stale.
#[derive(Debug)]
pub struct NoticeClock {
    generation: u64,
    delay_ms: u32,
}

impl NoticeClock {
    pub fn new(delay_ms: u32) -> Self {
        Self { generation: 0, delay_ms }
    }

    pub fn arm(&mut self, now_ms: f64) -> Armed {
        self.generation += 1;
        Armed {
            generation: self.generation,
            delay_ms: self.delay_ms,
            expires_at: now_ms + f64::from(self.delay_ms),
        }
    }

    /// Invalidates any outstanding ticket and returns the new generation.
    pub fn disarm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionState {
    pub phase: Phase,
    pub expires_at: Option<f64>,
    pub error: Option<SubmissionError>,
    generation: u64,
}

pub enum NoticeAction {
    Acknowledge(Armed),
    Expire(u64),
    Reject { generation: u64, error: SubmissionError },
}

impl SubmissionState {
    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    pub fn apply(&self, action: NoticeAction) -> Self {
        match action {
            NoticeAction::Acknowledge(armed) => Self {
                phase: Phase::Submitted,
                expires_at: Some(armed.expires_at),
                error: None,
                generation: armed.generation,
            },
            NoticeAction::Expire(generation) if generation == self.generation => Self {
                phase: Phase::Idle,
                expires_at: None,
                error: self.error.clone(),
                generation,
            },
            NoticeAction::Expire(_) => self.clone(),
            NoticeAction::Reject { generation, error } => Self {
                phase: Phase::Idle,
                expires_at: None,
                error: Some(error),
                generation,
            },
        }
    }
}

impl Reducible for SubmissionState {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Clone, PartialEq)]
pub struct UseNoticeHandle {
    state: UseReducerHandle<SubmissionState>,
    pub acknowledge: Callback<()>,
    pub reject: Callback<SubmissionError>,
}

impl UseNoticeHandle {
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }
}

/// Submission acknowledgement that hides itself `delay_ms` after the most
/// recent successful submit. A new submit replaces the pending reset timer,
/// and unmounting drops it.
#[hook]
pub fn use_ephemeral_notice(delay_ms: u32) -> UseNoticeHandle {
    let state = use_reducer(SubmissionState::default);
    let clock = use_mut_ref(|| NoticeClock::new(delay_ms));
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let pending = pending.clone();
        use_unmount(move || {
            if pending.borrow_mut().take().is_some() {
                debug!("cancelled notice reset on unmount");
            }
        });
    }

    let acknowledge = {
        let dispatcher = state.dispatcher();
        let clock = clock.clone();
        let pending = pending.clone();
        Callback::from(move |_: ()| {
            let armed = clock.borrow_mut().arm(js_sys::Date::now());
            dispatcher.dispatch(NoticeAction::Acknowledge(armed));

            let reset = dispatcher.clone();
            let timeout = Timeout::new(armed.delay_ms, move || {
                reset.dispatch(NoticeAction::Expire(armed.generation));
            });
            // Dropping the previous Timeout clears it.
            if pending.borrow_mut().replace(timeout).is_some() {
                debug!("restarted notice window (generation {})", armed.generation);
            }
        })
    };

    let reject = {
        let dispatcher = state.dispatcher();
        let clock = clock.clone();
        let pending = pending.clone();
        Callback::from(move |error: SubmissionError| {
            pending.borrow_mut().take();
            let generation = clock.borrow_mut().disarm();
            dispatcher.dispatch(NoticeAction::Reject { generation, error });
        })
    };

    UseNoticeHandle {
        state,
        acknowledge,
        reject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    const DELAY: u32 = 4000;

    /// Plays the role of the browser timer queue: a new submit cancels the
    /// pending reset, and `advance` fires whatever is due.
    struct Timeline {
        now: f64,
        clock: NoticeClock,
        state: SubmissionState,
        pending: Option<Armed>,
    }

    impl Timeline {
        fn new() -> Self {
            Self {
                now: 0.0,
                clock: NoticeClock::new(DELAY),
                state: SubmissionState::default(),
                pending: None,
            }
        }

        fn submit(&mut self) {
            let armed = self.clock.arm(self.now);
            self.state = self.state.apply(NoticeAction::Acknowledge(armed));
            self.pending = Some(armed);
        }

        fn advance_to(&mut self, t: f64) {
            self.now = t;
            if let Some(armed) = self.pending {
                if armed.expires_at <= t {
                    self.pending = None;
                    self.state = self.state.apply(NoticeAction::Expire(armed.generation));
                }
            }
        }
    }

    #[test]
    fn submit_is_visible_immediately_and_hides_after_delay() {
        let mut timeline = Timeline::new();
        assert_eq!(timeline.state.phase, Phase::Idle);

        timeline.submit();
        assert_eq!(timeline.state.phase, Phase::Submitted);
        assert_eq!(timeline.state.expires_at, Some(4000.0));

        timeline.advance_to(3999.0);
        assert!(timeline.state.is_submitted());

        timeline.advance_to(4000.0);
        assert_eq!(timeline.state.phase, Phase::Idle);
        assert_eq!(timeline.state.expires_at, None);
    }

    #[test]
    fn resubmitting_restarts_the_window_without_flicker() {
        let mut timeline = Timeline::new();
        timeline.submit();
        timeline.advance_to(3000.0);
        timeline.submit();

        for t in [4000.0, 5000.0, 6999.0] {
            timeline.advance_to(t);
            assert!(timeline.state.is_submitted(), "flickered to idle at {t}");
        }

        timeline.advance_to(7000.0);
        assert_eq!(timeline.state.phase, Phase::Idle);
    }

    #[test]
    fn stale_reset_is_ignored_even_if_it_fires() {
        let mut clock = NoticeClock::new(DELAY);
        let first = clock.arm(0.0);
        let second = clock.arm(1000.0);

        let state = SubmissionState::default()
            .apply(NoticeAction::Acknowledge(first))
            .apply(NoticeAction::Acknowledge(second))
            .apply(NoticeAction::Expire(first.generation));
        assert!(state.is_submitted());

        let state = state.apply(NoticeAction::Expire(second.generation));
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn cycle_is_reusable() {
        let mut timeline = Timeline::new();
        for round in 0..3 {
            let start = f64::from(round) * 10_000.0;
            timeline.advance_to(start);
            timeline.submit();
            assert!(timeline.state.is_submitted());
            timeline.advance_to(start + f64::from(DELAY));
            assert_eq!(timeline.state.phase, Phase::Idle);
        }
    }

    #[test]
    fn rejection_is_idle_with_error_and_voids_pending_reset() {
        let mut clock = NoticeClock::new(DELAY);
        let armed = clock.arm(0.0);
        let state = SubmissionState::default().apply(NoticeAction::Acknowledge(armed));

        let error = SubmissionError::from(ValidationError::MissingField { field: "Email" });
        let generation = clock.disarm();
        let state = state.apply(NoticeAction::Reject {
            generation,
            error: error.clone(),
        });
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.error, Some(error.clone()));

        let state = state.apply(NoticeAction::Expire(armed.generation));
        assert_eq!(state.error, Some(error));
    }

    #[test]
    fn success_clears_previous_error() {
        let mut clock = NoticeClock::new(DELAY);
        let generation = clock.disarm();
        let state = SubmissionState::default().apply(NoticeAction::Reject {
            generation,
            error: SubmissionError::Delivery("offline".into()),
        });
        let state = state.apply(NoticeAction::Acknowledge(clock.arm(10.0)));
        assert!(state.is_submitted());
        assert_eq!(state.error, None);
    }
}
