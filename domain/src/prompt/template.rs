//! Prompt templates for answer drafting and verification

use super::render::render;

/// Sentence the generator is told to reply with when the context does not
/// contain the answer.
pub const REFUSAL_PHRASE: &str = "I cannot answer this question based on the provided documents.";

/// Response layout the verifier asks the model to follow.
pub const VERIFICATION_FORMAT: &str = "Supported: YES/NO
Unsupported Claims: [items]
Contradictions: [items]
Relevant: YES/NO";

const RESEARCH_TEMPLATE: &str = r#"Answer the following question based on the provided context. Be precise and factual.

Question: {question}

Context:
{context}

If the context is insufficient, respond with: "{refusal}""#;

const VERIFICATION_TEMPLATE: &str = r#"Verify the following answer against the provided context. Check for:
1. Direct factual support (YES/NO)
2. Unsupported claims (list)
3. Contradictions (list)
4. Relevance to the question (YES/NO)

Respond in this format:
{format}

Answer: {answer}
Context: {context}"#;

/// Templates for generating prompts for each agent
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking the model to answer `question` from `context` only
    pub fn research(question: &str, context: &str) -> String {
        render(
            RESEARCH_TEMPLATE,
            &[
                ("question", question),
                ("context", context),
                ("refusal", REFUSAL_PHRASE),
            ],
        )
    }

    /// Prompt asking the model to judge `answer` against `context`
    pub fn verification(answer: &str, context: &str) -> String {
        render(
            VERIFICATION_TEMPLATE,
            &[
                ("format", VERIFICATION_FORMAT),
                ("answer", answer),
                ("context", context),
            ],
        )
    }
}
