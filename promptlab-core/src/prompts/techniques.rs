//! Prompt templates for the basic/advanced, few-shot, and chain-of-thought
//! techniques.
//!
//! Every builder here is a total, pure function: the same inputs always give
//! byte-identical output, and free text is embedded verbatim.

use clap::ValueEnum;
use std::fmt;

/// Topic used by the basic and advanced prompts when none is given
pub const DEFAULT_TOPIC: &str = "Python";

/// Who the advanced prompt is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Audience {
    #[default]
    BeginnerProgrammer,
    ExperiencedDeveloper,
    NonTechnicalManager,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::BeginnerProgrammer => "beginner programmer",
            Audience::ExperiencedDeveloper => "experienced developer",
            Audience::NonTechnicalManager => "non-technical manager",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape the advanced prompt asks the answer to take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum ResponseFormat {
    #[default]
    ConciseExplanation,
    DetailedGuide,
    ProsAndCons,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::ConciseExplanation => "concise explanation",
            ResponseFormat::DetailedGuide => "detailed guide",
            ResponseFormat::ProsAndCons => "pros and cons",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unstructured baseline prompt
pub fn basic(topic: &str) -> String {
    format!("Explain {topic}")
}

/// The structured prompt contrasted with [`basic`]
pub fn advanced(topic: &str, audience: Audience, format: ResponseFormat) -> String {
    format!(
        "Please explain {topic} to a {audience}.

Structure your response as a {format} that:
- Uses clear, accessible language
- Includes practical examples
- Highlights key takeaways
- Keeps the explanation focused and actionable

Target length: 2-3 paragraphs."
    )
}

const EMAIL_EXAMPLES: &str = r#"Here are examples of how to classify emails:

Example 1:
Email: "Hi team, please review the Q4 budget by Friday."
Classification: Work - Action Required

Example 2:
Email: "Your Amazon order has shipped!"
Classification: Personal - Notification

Example 3:
Email: "Reminder: Dentist appointment tomorrow at 2pm"
Classification: Personal - Reminder

Now classify this email:"#;

const SENTIMENT_EXAMPLES: &str = r#"Analyze the sentiment of these reviews:

Review: "This product exceeded my expectations! Highly recommend."
Sentiment: Positive (Enthusiastic)

Review: "It's okay, does what it says but nothing special."
Sentiment: Neutral

Review: "Waste of money. Broke after one week."
Sentiment: Negative (Frustrated)

Now analyze this review:"#;

const TRANSFORMATION_EXAMPLES: &str = r#"Transform these sentences into professional business language:

Casual: "Can you send me that thing we talked about?"
Professional: "Could you please send me the document we discussed?"

Casual: "The meeting was kinda boring tbh"
Professional: "The meeting could have been more engaging."

Casual: "Yeah, I'll get to it whenever I can"
Professional: "I will prioritize this task and complete it as soon as possible."

Transform this sentence:"#;

/// Task family for a few-shot prompt
///
/// The label and cue always come from the same family as the example block,
/// so the model sees the target slot in exactly the format it was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum FewShotTask {
    #[default]
    EmailClassification,
    SentimentAnalysis,
    TextTransformation,
}

impl FewShotTask {
    pub fn title(&self) -> &'static str {
        match self {
            FewShotTask::EmailClassification => "Email Classification",
            FewShotTask::SentimentAnalysis => "Sentiment Analysis",
            FewShotTask::TextTransformation => "Text Transformation",
        }
    }

    /// Fixed worked examples, ending with the instruction line
    pub fn examples(&self) -> &'static str {
        match self {
            FewShotTask::EmailClassification => EMAIL_EXAMPLES,
            FewShotTask::SentimentAnalysis => SENTIMENT_EXAMPLES,
            FewShotTask::TextTransformation => TRANSFORMATION_EXAMPLES,
        }
    }

    /// Label of the slot holding the user input
    pub fn input_label(&self) -> &'static str {
        match self {
            FewShotTask::EmailClassification => "Email",
            FewShotTask::SentimentAnalysis => "Review",
            FewShotTask::TextTransformation => "Casual",
        }
    }

    /// Trailing token the model is expected to complete
    pub fn cue(&self) -> &'static str {
        match self {
            FewShotTask::EmailClassification => "Classification:",
            FewShotTask::SentimentAnalysis => "Sentiment:",
            FewShotTask::TextTransformation => "Professional:",
        }
    }

    pub fn default_input(&self) -> &'static str {
        match self {
            FewShotTask::EmailClassification => "Hey! Want to grab coffee this weekend?",
            FewShotTask::SentimentAnalysis => {
                "The features are good but customer service was terrible."
            }
            FewShotTask::TextTransformation => "Nah, that idea won't work, we tried it before",
        }
    }
}

impl fmt::Display for FewShotTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Example block, then the labelled user input, then the cue
pub fn few_shot(task: FewShotTask, user_input: &str) -> String {
    format!(
        "{}\n{}: {}\n{}",
        task.examples(),
        task.input_label(),
        user_input,
        task.cue()
    )
}

/// Reasoning scaffold for a chain-of-thought prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum ProblemKind {
    #[default]
    MathWordProblem,
    LogicPuzzle,
    DecisionAnalysis,
}

impl ProblemKind {
    pub fn title(&self) -> &'static str {
        match self {
            ProblemKind::MathWordProblem => "Math Word Problem",
            ProblemKind::LogicPuzzle => "Logic Puzzle",
            ProblemKind::DecisionAnalysis => "Decision Analysis",
        }
    }

    pub fn default_problem(&self) -> &'static str {
        match self {
            ProblemKind::MathWordProblem => {
                "A store sells notebooks for $3 each. If you buy 5 or more, you get 20% off. How much would 7 notebooks cost?"
            }
            ProblemKind::LogicPuzzle => {
                "Alice is older than Bob. Bob is older than Carol. David is younger than Bob but older than Carol. List the people from oldest to youngest."
            }
            ProblemKind::DecisionAnalysis => {
                "Should a small business invest in AI automation tools? Budget: $10k/year. Team size: 8 people."
            }
        }
    }

    fn lead(&self) -> &'static str {
        match self {
            ProblemKind::MathWordProblem => {
                "Solve this problem step by step, showing your reasoning:"
            }
            ProblemKind::LogicPuzzle => {
                "Solve this logic puzzle by reasoning through it step by step:"
            }
            ProblemKind::DecisionAnalysis => "Analyze this decision systematically:",
        }
    }

    fn steps(&self) -> [&'static str; 4] {
        match self {
            ProblemKind::MathWordProblem => [
                "Identify what we know",
                "Determine what we need to find",
                "Show each calculation step",
                "State the final answer clearly",
            ],
            ProblemKind::LogicPuzzle => [
                "List what we know",
                "Draw logical conclusions from each statement",
                "Show your reasoning for each step",
                "Present the final answer",
            ],
            ProblemKind::DecisionAnalysis => [
                "Identify key factors to consider",
                "Analyze pros and cons",
                "Consider implementation challenges",
                "Provide a reasoned recommendation",
            ],
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Problem text wrapped in the scaffold for `kind`
pub fn chain_of_thought(kind: ProblemKind, problem: &str) -> String {
    let mut prompt = format!("{}\n\n{}\n\nPlease:", kind.lead(), problem);
    for (index, step) in kind.steps().iter().enumerate() {
        prompt.push_str(&format!("\n{}. {}", index + 1, step));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_first_choice_of_each_selector() {
        assert_eq!(Audience::default(), Audience::BeginnerProgrammer);
        assert_eq!(
            ResponseFormat::default(),
            ResponseFormat::ConciseExplanation
        );
        assert_eq!(FewShotTask::default(), FewShotTask::EmailClassification);
        assert_eq!(ProblemKind::default(), ProblemKind::MathWordProblem);
    }

    #[test]
    fn basic_prompt_is_bare() {
        assert_eq!(basic("recursion"), "Explain recursion");
        assert_eq!(basic(""), "Explain ");
    }

    #[test]
    fn advanced_prompt_matches_template_exactly() {
        let prompt = advanced(
            "recursion",
            Audience::BeginnerProgrammer,
            ResponseFormat::ConciseExplanation,
        );
        let expected = "Please explain recursion to a beginner programmer.\n\
\n\
Structure your response as a concise explanation that:\n\
- Uses clear, accessible language\n\
- Includes practical examples\n\
- Highlights key takeaways\n\
- Keeps the explanation focused and actionable\n\
\n\
Target length: 2-3 paragraphs.";
        assert_eq!(prompt, expected);
    }

    #[test]
    fn builders_are_deterministic() {
        for task in FewShotTask::value_variants() {
            assert_eq!(few_shot(*task, "same"), few_shot(*task, "same"));
        }
        for kind in ProblemKind::value_variants() {
            assert_eq!(chain_of_thought(*kind, "p"), chain_of_thought(*kind, "p"));
        }
        assert_eq!(
            advanced(
                "x",
                Audience::NonTechnicalManager,
                ResponseFormat::ProsAndCons
            ),
            advanced(
                "x",
                Audience::NonTechnicalManager,
                ResponseFormat::ProsAndCons
            )
        );
    }

    #[test]
    fn sentiment_prompt_ends_with_review_slot() {
        let prompt = few_shot(FewShotTask::SentimentAnalysis, "fine I guess");
        assert!(prompt.ends_with("Review: fine I guess\nSentiment:"));
    }

    #[test]
    fn few_shot_keeps_examples_before_input() {
        let input = "Quarterly numbers attached, \"urgent\"";
        for task in FewShotTask::value_variants() {
            let prompt = few_shot(*task, input);
            let examples_at = prompt.find(task.examples()).unwrap();
            let input_at = prompt.find(input).unwrap();
            assert_eq!(examples_at, 0);
            assert!(input_at > task.examples().len());
            assert!(prompt.ends_with(task.cue()));
        }
    }

    #[test]
    fn few_shot_cue_matches_example_family() {
        for task in FewShotTask::value_variants() {
            let label_line = format!("{}: ", task.input_label());
            assert!(task.examples().contains(&label_line));
            assert!(task.examples().contains(task.cue()));
        }
    }

    #[test]
    fn chain_of_thought_embeds_problem_and_numbered_suffix() {
        let problem = "What is 17 * 3?";
        let prompt = chain_of_thought(ProblemKind::MathWordProblem, problem);
        assert!(prompt.starts_with("Solve this problem step by step, showing your reasoning:\n\n"));
        assert!(prompt.contains(&format!("\n\n{problem}\n\nPlease:\n1. Identify what we know")));
        assert!(prompt.ends_with("4. State the final answer clearly"));

        let decision = chain_of_thought(ProblemKind::DecisionAnalysis, "Hire?");
        assert!(decision.ends_with("4. Provide a reasoned recommendation"));
    }

    #[test]
    fn value_names_are_kebab_case() {
        let audience = Audience::from_str("non-technical-manager", true).unwrap();
        assert_eq!(audience, Audience::NonTechnicalManager);
        let task = FewShotTask::from_str("sentiment-analysis", true).unwrap();
        assert_eq!(task.title(), "Sentiment Analysis");
    }
}
