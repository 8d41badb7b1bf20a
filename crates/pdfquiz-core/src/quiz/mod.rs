//! Quiz request model and the offline fallback synthesizer.

mod fallback;
mod heuristics;
mod types;

pub use fallback::{FallbackQuiz, QuestionSection, SynthesisContext, TIMESTAMP_FORMAT, synthesize};
pub use heuristics::{DEFAULT_TOPIC, extract_keywords, extract_topic, summarize};
pub use types::{QuestionType, QuestionTypeSet};
