//! Reply payloads returned to the chat transport.

/// Where the transport should surface a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Visible to the whole channel.
    Broadcast,
    /// Visible only to the caller.
    Private,
}

/// A reply produced by executing one invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    /// How widely the transport should show the text.
    pub visibility: Visibility,
    /// The reply text.
    pub text: String,
}

impl Reply {
    /// Creates a channel-visible reply.
    #[must_use]
    pub fn broadcast(text: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Broadcast,
            text: text.into(),
        }
    }

    /// Creates a caller-only reply.
    #[must_use]
    pub fn private(text: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Private,
            text: text.into(),
        }
    }
}
