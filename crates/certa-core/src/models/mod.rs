mod hypothesis;
mod question;
mod rating;
mod symptom;
mod verdict;

pub use hypothesis::{Hypothesis, Rule, ThresholdRange};
pub use question::{Question, QuestionPrompt};
pub use rating::{RatingMode, RatingScale, RatingSet};
pub use symptom::Symptom;
pub use verdict::{Assessment, RuleMatch, SymptomContribution, Verdict};
