// Prompt construction for MCQ generation.
// The template fixes the output contract the export side relies on:
// 5 questions, options A-D, one "Answer:" line each, numbered from Q1,
// no surrounding prose.

/// Substituted for the chapter-content block when none is supplied.
pub const NO_CONTENT_PLACEHOLDER: &str =
    "No specific content provided. Generate general MCQs for the topic.";

/// Substituted for the PYQ block when none is supplied.
pub const NO_PYQS_PLACEHOLDER: &str = "No PYQs provided.";

/// Builds the generation prompt. Inputs are embedded verbatim; caller-supplied
/// text is trusted and never escaped. Pure and deterministic.
pub fn build_mcq_prompt(topic: &str, content: &str, pyqs: &str) -> String {
    let content_block = if content.is_empty() {
        NO_CONTENT_PLACEHOLDER
    } else {
        content
    };
    let pyq_block = if pyqs.is_empty() { NO_PYQS_PLACEHOLDER } else { pyqs };

    format!(
        r#"You are an expert MCQ generator for NCERT Social Science topics.
Generate 5 high-quality Multiple Choice Questions (MCQs) based on the following topic and content.
If no content is provided, generate general MCQs for the topic.

Topic: "{topic}"

Chapter Content (use this as the primary source):
---
{content_block}
---

Previous Year Questions (PYQs) for reference (optional, use for style/focus if relevant):
---
{pyq_block}
---

Each MCQ should strictly follow this format:
Q[Number]. [Question Text]?
A) [Option A]
B) [Option B]
C) [Option C]
D) [Option D]
Answer: [Correct Option Letter, e.g., B]

Ensure each MCQ is distinct, clear, and directly related to the topic/content.
Provide only the MCQs and their answers, with no extra introductory or concluding text.
Start directly with "Q1.""#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeds_topic_verbatim() {
        let prompt = build_mcq_prompt("The Mughal Empire", "", "");
        assert!(prompt.contains("Topic: \"The Mughal Empire\""));
    }

    #[test]
    fn test_empty_content_uses_placeholder() {
        let prompt = build_mcq_prompt("Rivers", "", "");
        assert!(prompt.contains(NO_CONTENT_PLACEHOLDER));
    }

    #[test]
    fn test_supplied_content_replaces_placeholder() {
        let prompt = build_mcq_prompt("Rivers", "The Ganga rises in the Himalayas.", "");
        assert!(prompt.contains("The Ganga rises in the Himalayas."));
        assert!(!prompt.contains(NO_CONTENT_PLACEHOLDER));
    }

    #[test]
    fn test_empty_pyqs_uses_placeholder() {
        let prompt = build_mcq_prompt("Rivers", "", "");
        assert!(prompt.contains(NO_PYQS_PLACEHOLDER));
    }

    #[test]
    fn test_supplied_pyqs_embedded() {
        let prompt = build_mcq_prompt("Rivers", "", "Q1. Which river is longest?");
        assert!(prompt.contains("Q1. Which river is longest?"));
        assert!(!prompt.contains(NO_PYQS_PLACEHOLDER));
    }

    #[test]
    fn test_fixes_question_count_and_format() {
        let prompt = build_mcq_prompt("Rivers", "", "");
        assert!(prompt.contains("Generate 5 high-quality"));
        assert!(prompt.contains("Answer: [Correct Option Letter"));
        assert!(prompt.contains("Start directly with \"Q1.\""));
    }

    #[test]
    fn test_deterministic() {
        let a = build_mcq_prompt("Soil", "Chapter text", "Old questions");
        let b = build_mcq_prompt("Soil", "Chapter text", "Old questions");
        assert_eq!(a, b);
    }
}
