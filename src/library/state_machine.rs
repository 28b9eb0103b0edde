use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

/// Elm-style runtime driven from a UI loop.
///
/// The owner dispatches messages directly or calls [`StateMachine::pump`] once
/// per frame to drain messages produced by effects. Each effect runs on its own
/// thread and reports back through the channel.
pub struct StateMachine<TState, TMsg, TEffect, T, E>
where
    T: Fn(TState, TMsg) -> (TState, Vec<TEffect>),
    E: Fn(TEffect, Sender<TMsg>) + Send + Sync,
{
    state: TState,
    transition_fn: T,
    run_effect_fn: Arc<E>,
    msg_sender: Sender<TMsg>,
    msg_receiver: Receiver<TMsg>,
    in_flight: Arc<AtomicUsize>,
    _effect: std::marker::PhantomData<TEffect>,
}

impl<TState, TMsg, TEffect, T, E> StateMachine<TState, TMsg, TEffect, T, E>
where
    TState: Clone,
    TMsg: Send + 'static,
    TEffect: Send + 'static,
    T: Fn(TState, TMsg) -> (TState, Vec<TEffect>),
    E: Fn(TEffect, Sender<TMsg>) + Send + Sync + 'static,
{
    pub fn new(init: (TState, Vec<TEffect>), transition_fn: T, run_effect_fn: E) -> Self {
        let (msg_sender, msg_receiver) = channel();
        let (state, effects) = init;

        let machine = Self {
            state,
            transition_fn,
            run_effect_fn: Arc::new(run_effect_fn),
            msg_sender,
            msg_receiver,
            in_flight: Arc::new(AtomicUsize::new(0)),
            _effect: std::marker::PhantomData,
        };

        machine.spawn_effects(effects);

        machine
    }

    pub fn state(&self) -> &TState {
        &self.state
    }

    /// Number of effects that have been spawned and not yet finished.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn dispatch(&mut self, msg: TMsg) {
        let (new_state, effects) = (self.transition_fn)(self.state.clone(), msg);
        self.state = new_state;
        self.spawn_effects(effects);
    }

    /// Applies every message that is already waiting. Never blocks.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.msg_receiver.try_recv() {
            self.dispatch(msg);
            handled += 1;
        }
        handled
    }

    /// Waits up to `timeout` for a single message and applies it.
    #[cfg(test)]
    pub fn pump_timeout(&mut self, timeout: std::time::Duration) -> bool {
        match self.msg_receiver.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                true
            }
            Err(_) => false,
        }
    }

    fn spawn_effects(&self, effects: Vec<TEffect>) {
        for effect in effects {
            let msg_sender = self.msg_sender.clone();
            let run_effect_fn = Arc::clone(&self.run_effect_fn);
            let in_flight = Arc::clone(&self.in_flight);
            in_flight.fetch_add(1, Ordering::SeqCst);
            std::thread::spawn(move || {
                run_effect_fn(effect, msg_sender);
                in_flight.fetch_sub(1, Ordering::SeqCst);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Add(i32),
        Double,
    }

    #[derive(Debug, Clone)]
    enum Effect {
        AddLater(i32),
    }

    fn transition(state: i32, msg: Msg) -> (i32, Vec<Effect>) {
        match msg {
            Msg::Add(n) => (state + n, vec![]),
            Msg::Double => (state * 2, vec![Effect::AddLater(1)]),
        }
    }

    fn run_effect(effect: Effect, sender: Sender<Msg>) {
        match effect {
            Effect::AddLater(n) => {
                let _ = sender.send(Msg::Add(n));
            }
        }
    }

    fn pump_until(
        machine: &mut StateMachine<i32, Msg, Effect, fn(i32, Msg) -> (i32, Vec<Effect>), fn(Effect, Sender<Msg>)>,
        expected: i32,
    ) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while *machine.state() != expected && Instant::now() < deadline {
            machine.pump_timeout(Duration::from_millis(50));
        }
    }

    #[test]
    fn test_init_effects_are_spawned() {
        let mut machine = StateMachine::new(
            (1, vec![Effect::AddLater(10)]),
            transition as fn(i32, Msg) -> (i32, Vec<Effect>),
            run_effect as fn(Effect, Sender<Msg>),
        );

        pump_until(&mut machine, 11);

        assert_eq!(*machine.state(), 11);
    }

    #[test]
    fn test_dispatch_applies_transition_and_runs_effects() {
        let mut machine = StateMachine::new(
            (3, vec![]),
            transition as fn(i32, Msg) -> (i32, Vec<Effect>),
            run_effect as fn(Effect, Sender<Msg>),
        );

        machine.dispatch(Msg::Double);
        assert_eq!(*machine.state(), 6);

        pump_until(&mut machine, 7);
        assert_eq!(*machine.state(), 7);
    }

    #[test]
    fn test_pump_without_messages_does_nothing() {
        let mut machine = StateMachine::new(
            (0, vec![]),
            transition as fn(i32, Msg) -> (i32, Vec<Effect>),
            run_effect as fn(Effect, Sender<Msg>),
        );

        assert_eq!(machine.pump(), 0);
        assert_eq!(machine.in_flight(), 0);
        assert_eq!(*machine.state(), 0);
    }
}
