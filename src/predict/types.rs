use serde::{Deserialize, Serialize};

/// A confidence or probability in [0, 1], tagged with where it came from.
///
/// Three of the four backends do not return a score at all, so the adapter
/// substitutes documented placeholders. Callers must be able to tell a
/// genuine model output from a client-synthesized default, so the two are
/// separate variants rather than a bare float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Score {
    /// Produced by the backend model.
    Model(f64),
    /// Synthesized by this client because the backend omits the field.
    Placeholder(f64),
}

impl Score {
    pub fn value(&self) -> f64 {
        match self {
            Self::Model(v) | Self::Placeholder(v) => *v,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}
