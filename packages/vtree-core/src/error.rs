use thiserror::Error;

/// Everything that can go wrong while walking a [`crate::VNode`] tree.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A node could not be resolved into markup: an element with an empty
    /// tag name, or a component descriptor with neither a functional nor a
    /// classful render path.
    #[error("invalid node: {0}")]
    InvalidNode(String),

    /// A component panicked while being instantiated or rendered. The
    /// panic payload is captured and re-surfaced as the error source where
    /// possible.
    #[error("component `{name}` failed to render")]
    Component {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Reserved for callers that plug `render_to_stream`'s output into a
    /// fallible sink (a socket, a file). The engine itself never produces
    /// this variant.
    #[error("sink error: {0}")]
    Sink(String),
}

/// A panic payload downcast into a displayable error, used to fill
/// [`RenderError::Component::source`].
#[derive(Debug)]
pub(crate) struct PanicPayload(pub String);

impl std::fmt::Display for PanicPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for PanicPayload {}

pub(crate) fn describe_panic(payload: Box<dyn std::any::Any + Send>) -> PanicPayload {
    if let Some(s) = payload.downcast_ref::<&str>() {
        PanicPayload(s.to_string())
    } else if let Some(s) = payload.downcast_ref::<String>() {
        PanicPayload(s.clone())
    } else {
        PanicPayload("component panicked with a non-string payload".to_string())
    }
}
