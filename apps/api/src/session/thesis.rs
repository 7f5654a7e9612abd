//! One-shot thesis derivation.
//!
//! Runs exactly once, synchronously, at session creation — a deliberate
//! latency/cost tradeoff: session setup pays for one extra call so every
//! later prediction is cheaper and better grounded.

use tracing::warn;

use crate::llm_client::Generator;
use crate::session::prompts::{render_thesis_prompt, THESIS_SYSTEM};

const THESIS_MAX_TOKENS: u32 = 100;
const THESIS_TEMPERATURE: f32 = 0.3;

/// Derives the one-sentence core argument for a session.
///
/// Any failure is swallowed to an empty string — session creation must never
/// fail because thesis derivation did.
pub async fn derive_thesis(llm: &dyn Generator, outline: &str, style: &str, tone: &str) -> String {
    let prompt = render_thesis_prompt(outline, style, tone);
    match llm
        .complete(THESIS_SYSTEM, &prompt, THESIS_MAX_TOKENS, THESIS_TEMPERATURE)
        .await
    {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("Thesis derivation failed, continuing without one: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct FixedGenerator(&'static str);

    #[async_trait]
    impl Generator for FixedGenerator {
        async fn complete(
            &self,
            _system: &str,
            _prompt: &str,
            _max_tokens: u32,
            _temperature: f32,
        ) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl Generator for FailingGenerator {
        async fn complete(
            &self,
            _system: &str,
            _prompt: &str,
            _max_tokens: u32,
            _temperature: f32,
        ) -> Result<String, LlmError> {
            Err(LlmError::Injected("model unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_thesis_is_trimmed_model_output() {
        let llm = FixedGenerator("  X cuts Y by 40% in production.\n");
        let thesis = derive_thesis(&llm, "How X reduces Y", "", "").await;
        assert_eq!(thesis, "X cuts Y by 40% in production.");
    }

    #[tokio::test]
    async fn test_failure_is_swallowed_to_empty_string() {
        let thesis = derive_thesis(&FailingGenerator, "How X reduces Y", "", "").await;
        assert_eq!(thesis, "");
    }
}
