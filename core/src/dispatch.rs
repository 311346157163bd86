//! Classifying an update into named events and delivering them to handlers.
//!
//! # Design
//! `events` is a pure function producing the ordered event sequence for one
//! update: `update` first, then each populated top-level kind, then (for
//! `message` only) each populated message sub-kind carrying the whole
//! message. `Dispatcher` fans that sequence out synchronously, in order, to
//! the handlers subscribed to each topic. No state survives between calls.

use serde_json::Value;

use crate::update::{MessageKind, Update, UpdateKind};

/// Name of the event fired for every update.
pub const UPDATE_EVENT: &str = "update";

/// One notification derived from an update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// Fired first, with the whole update.
    Update(&'a Update),
    /// A populated top-level field, with that field's value.
    Kind(UpdateKind, &'a Value),
    /// A populated message sub-kind, with the whole message.
    Message(MessageKind, &'a Value),
}

impl<'a> Event<'a> {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Update(_) => UPDATE_EVENT,
            Event::Kind(kind, _) => kind.name(),
            Event::Message(kind, _) => kind.name(),
        }
    }

    pub fn topic(&self) -> Topic {
        match self {
            Event::Update(_) => Topic::Update,
            Event::Kind(kind, _) => Topic::Kind(*kind),
            Event::Message(kind, _) => Topic::Message(*kind),
        }
    }

    /// The update for `Event::Update`, otherwise `None`.
    pub fn update(&self) -> Option<&'a Update> {
        match *self {
            Event::Update(update) => Some(update),
            _ => None,
        }
    }

    /// The carried value for kind and message events.
    pub fn value(&self) -> Option<&'a Value> {
        match *self {
            Event::Update(_) => None,
            Event::Kind(_, value) | Event::Message(_, value) => Some(value),
        }
    }
}

/// What a handler subscribes to.
///
/// `Kind(UpdateKind::Poll)` and `Message(MessageKind::Poll)` share the event
/// name `poll` but are distinct topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Update,
    Kind(UpdateKind),
    Message(MessageKind),
}

/// Ordered events for one update.
pub fn events(update: &Update) -> Vec<Event<'_>> {
    let mut out = vec![Event::Update(update)];
    for (kind, value) in update.kinds() {
        out.push(Event::Kind(kind, value));
        if kind == UpdateKind::Message {
            out.extend(
                MessageKind::ALL
                    .into_iter()
                    .filter(|sub| sub.present_in(value))
                    .map(|sub| Event::Message(sub, value)),
            );
        }
    }
    out
}

type Handler = Box<dyn FnMut(&Event<'_>)>;

/// Synchronous publish/subscribe fan-out of update events.
#[derive(Default)]
pub struct Dispatcher {
    handlers: Vec<(Option<Topic>, Handler)>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to one topic.
    pub fn on(&mut self, topic: Topic, handler: impl FnMut(&Event<'_>) + 'static) -> &mut Self {
        self.handlers.push((Some(topic), Box::new(handler)));
        self
    }

    /// Subscribe `handler` to every event.
    pub fn on_any(&mut self, handler: impl FnMut(&Event<'_>) + 'static) -> &mut Self {
        self.handlers.push((None, Box::new(handler)));
        self
    }

    /// Deliver every event of `update`, in order, to matching handlers in
    /// subscription order. Returns the number of events fired.
    pub fn dispatch(&mut self, update: &Update) -> usize {
        let events = events(update);
        tracing::debug!(update_id = update.update_id, events = events.len(), "dispatching update");
        for event in &events {
            tracing::trace!(event = event.name(), "firing");
            let topic = event.topic();
            for (filter, handler) in &mut self.handlers {
                if filter.map_or(true, |t| t == topic) {
                    handler(event);
                }
            }
        }
        events.len()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
