//! Decide/execute split for in-memory state machines.
//!
//! A machine owns its state and reacts to events synchronously. When a
//! reaction needs work it cannot do itself (ranking against the roster,
//! talking to the store) it returns a command; whoever drives the machine
//! executes the command and may feed a follow-up event back in.

pub trait Machine {
    type Event;
    type Command;

    /// Process one event, optionally requesting a command.
    ///
    /// Called serially, never async, at most one command per event.
    fn decide(&mut self, event: &Self::Event) -> Option<Self::Command>;
}
