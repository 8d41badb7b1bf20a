//! Models known to accept the question prompt.

/// A selectable hosted model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    /// Model id as used in the endpoint path.
    pub id: &'static str,
    /// Short description.
    pub description: &'static str,
}

/// Models offered for selection, default first.
pub const KNOWN_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "microsoft/DialoGPT-medium",
        description: "DialoGPT Medium - conversational model",
    },
    ModelInfo {
        id: "gpt2",
        description: "GPT-2 - general text generation",
    },
    ModelInfo {
        id: "facebook/blenderbot-400M-distill",
        description: "BlenderBot - distilled conversational model",
    },
    ModelInfo {
        id: "microsoft/DialoGPT-small",
        description: "DialoGPT Small - lightweight conversational model",
    },
];

/// Look up a catalogue entry by id.
pub fn find_model(id: &str) -> Option<&'static ModelInfo> {
    KNOWN_MODELS.iter().find(|m| m.id == id)
}
