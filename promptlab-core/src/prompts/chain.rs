//! Blog-writing prompt chain: brainstorm, then outline, then introduction.
//!
//! Each stage consumes the raw text the model returned for the stage before
//! it. The text is spliced in as-is; nothing is parsed or restructured. The
//! stage types make it impossible to build the outline prompt before a
//! brainstorm result exists.

use std::fmt;

/// Blog topic used when none is given
pub const DEFAULT_BLOG_TOPIC: &str = "The future of remote work";

/// Position in the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainStep {
    Brainstorm,
    Outline,
    Introduction,
}

impl ChainStep {
    pub const ALL: [ChainStep; 3] = [
        ChainStep::Brainstorm,
        ChainStep::Outline,
        ChainStep::Introduction,
    ];

    /// One-based step number
    pub fn index(&self) -> usize {
        match self {
            ChainStep::Brainstorm => 1,
            ChainStep::Outline => 2,
            ChainStep::Introduction => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChainStep::Brainstorm => "Brainstorming Key Points",
            ChainStep::Outline => "Creating Outline",
            ChainStep::Introduction => "Writing Introduction",
        }
    }

    /// Spinner text while this step is in flight
    pub fn busy_message(&self) -> &'static str {
        match self {
            ChainStep::Brainstorm => "Brainstorming...",
            ChainStep::Outline => "Creating outline...",
            ChainStep::Introduction => "Writing introduction...",
        }
    }

    pub fn next(&self) -> Option<ChainStep> {
        match self {
            ChainStep::Brainstorm => Some(ChainStep::Outline),
            ChainStep::Outline => Some(ChainStep::Introduction),
            ChainStep::Introduction => None,
        }
    }
}

impl fmt::Display for ChainStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.index(), self.title())
    }
}

/// Model output of the brainstorm step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brainstorm(pub String);

/// Model output of the outline step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline(pub String);

/// Model output of the introduction step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Introduction(pub String);

/// Prompt builder for one chain run, bound to a topic
#[derive(Debug, Clone, Copy)]
pub struct PromptChain<'a> {
    topic: &'a str,
}

impl<'a> PromptChain<'a> {
    pub fn new(topic: &'a str) -> Self {
        Self { topic }
    }

    pub fn brainstorm_prompt(&self) -> String {
        chain_step(ChainStep::Brainstorm, self.topic, "")
    }

    pub fn outline_prompt(&self, brainstorm: &Brainstorm) -> String {
        chain_step(ChainStep::Outline, self.topic, &brainstorm.0)
    }

    pub fn introduction_prompt(&self, outline: &Outline) -> String {
        chain_step(ChainStep::Introduction, self.topic, &outline.0)
    }
}

/// Build the prompt for `step`
///
/// `previous_output` is the literal text returned for the prior step and is
/// ignored for the brainstorm step, which has no predecessor.
pub fn chain_step(step: ChainStep, topic: &str, previous_output: &str) -> String {
    match step {
        ChainStep::Brainstorm => format!(
            "List 5 key points to discuss about '{topic}' in a blog post. Format as a numbered list."
        ),
        ChainStep::Outline => format!(
            "Based on these key points:

{previous_output}

Create a blog post outline for '{topic}' with:
- Engaging title
- Introduction hook
- 3-4 main sections
- Conclusion

Format as a clear outline."
        ),
        ChainStep::Introduction => format!(
            "Using this outline:

{previous_output}

Write a compelling 2-paragraph introduction for the blog post about '{topic}' that:
- Hooks the reader with a relevant statistic or question
- Establishes why this topic matters
- Previews what the post will cover"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brainstorm_prompt_quotes_topic() {
        let chain = PromptChain::new("tide pools");
        assert_eq!(
            chain.brainstorm_prompt(),
            "List 5 key points to discuss about 'tide pools' in a blog post. Format as a numbered list."
        );
    }

    #[test]
    fn each_stage_contains_previous_output_verbatim() {
        let chain = PromptChain::new(DEFAULT_BLOG_TOPIC);
        let brainstorm = Brainstorm("1. Flexibility\n2. Isolation\n  3. Tools & {braces}".into());
        let outline_prompt = chain.outline_prompt(&brainstorm);
        assert!(outline_prompt.contains(&brainstorm.0));
        assert!(outline_prompt.starts_with("Based on these key points:\n\n1. Flexibility"));

        let outline = Outline("Title: Work, Anywhere\nI. Hook".into());
        let intro_prompt = chain.introduction_prompt(&outline);
        assert!(intro_prompt.contains(&outline.0));
        assert!(intro_prompt.contains("blog post about 'The future of remote work' that:"));
        assert!(intro_prompt.ends_with("- Previews what the post will cover"));
    }

    #[test]
    fn brainstorm_ignores_previous_output() {
        assert_eq!(
            chain_step(ChainStep::Brainstorm, "t", "ignored"),
            chain_step(ChainStep::Brainstorm, "t", "")
        );
    }

    #[test]
    fn steps_walk_in_order() {
        let mut walked = vec![ChainStep::Brainstorm];
        while let Some(next) = walked.last().and_then(|s| s.next()) {
            walked.push(next);
        }
        assert_eq!(walked, ChainStep::ALL.to_vec());
        assert_eq!(ChainStep::Outline.to_string(), "Step 2: Creating Outline");
    }
}
