use std::cell::Cell;

use gloo_timers::callback::Interval;
use log::info;
use yew::prelude::*;

use crate::{StridePhase, StrideTick};

thread_local! {
    /// Stride timers currently running. Each mounted stick figure owns one.
    static LIVE_STRIDE_TIMERS: Cell<usize> = const { Cell::new(0) };
}

/// Number of stride timers that have been started and not yet released.
pub fn live_stride_timers() -> usize {
    LIVE_STRIDE_TIMERS.with(Cell::get)
}

/// Repeating stride timer; dropping it cancels the interval.
struct StrideTimer {
    _interval: Interval,
}

impl StrideTimer {
    fn start(interval_ms: u32, dispatcher: UseReducerDispatcher<StridePhase>) -> Self {
        let interval = Interval::new(interval_ms, move || dispatcher.dispatch(StrideTick));
        LIVE_STRIDE_TIMERS.with(|live| live.set(live.get() + 1));
        info!("Stride animation started ({} ms)", interval_ms);
        Self {
            _interval: interval,
        }
    }
}

impl Drop for StrideTimer {
    fn drop(&mut self) {
        LIVE_STRIDE_TIMERS.with(|live| live.set(live.get().saturating_sub(1)));
        info!("Stride animation stopped");
    }
}

/// Custom hook driving the stick figure's stride.
///
/// Starts a repeating timer on mount that flips the phase every
/// `interval_ms`; the timer is cancelled when the component unmounts.
#[hook]
pub fn use_stride_phase(interval_ms: u32) -> StridePhase {
    let phase = use_reducer(StridePhase::default);

    {
        let dispatcher = phase.dispatcher();
        use_effect_with(interval_ms, move |&interval_ms| {
            let timer = StrideTimer::start(interval_ms, dispatcher);
            move || drop(timer)
        });
    }

    *phase
}
