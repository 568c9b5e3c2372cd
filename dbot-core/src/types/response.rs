//! Handler result type.

/// What the event loop should do after a handler ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Keep receiving events.
    Continue,
    /// The event was not meant for this handler; keep receiving.
    Ignore,
    /// Terminate the event loop; no further events are handled.
    Stop,
}
