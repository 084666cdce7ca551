use crate::ai::client::InferenceBackend;
use crate::ai::prompts::{self, FormInput};
use crate::error::{self, ScdError};
use crate::ui::form::FormCollector;
use crate::ui::presenter;
use std::io::{BufRead, Write};

/// What a single generation request produced. Never both text and an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated(String),
    Failed(String),
}

pub struct Orchestrator<B> {
    backend: B,
}

impl<B: InferenceBackend> Orchestrator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn generate(&self, form: &FormInput) -> Outcome {
        let prompt = prompts::build_prompt(form);
        log::debug!("🧪 Building {} prompt ({} chars)", form.variant.label(), prompt.len());

        match self.backend.query(&prompt).await {
            Ok(text) => {
                log::info!("✅ Generation finished");
                Outcome::Generated(text)
            }
            Err(e) => {
                log::error!("❌ Generation failed: {e}");
                Outcome::Failed(error::describe(&e))
            }
        }
    }

    /// Form → trigger → result, repeated until the operator stops or input ends.
    /// A failed generation is shown and the session continues.
    pub async fn run_interactive<R: BufRead, W: Write>(
        &self,
        collector: &mut FormCollector<R, W>,
        endpoint_name: &str,
    ) -> Result<(), ScdError> {
        presenter::render_banner(collector.output_mut(), endpoint_name)?;

        loop {
            let form = collector.collect()?;

            match collector.confirm("\n⚡ Generate Test Cases?", true)? {
                Some(true) => {
                    writeln!(collector.output_mut(), "Calling Databricks LLM…")?;
                    let outcome = self.generate(&form).await;
                    presenter::render_outcome(collector.output_mut(), &outcome)?;
                }
                Some(false) => {}
                None => break,
            }

            if collector.confirm("\nGenerate another set?", false)? != Some(true) {
                break;
            }
            writeln!(collector.output_mut())?;
        }

        presenter::render_footer(collector.output_mut())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::prompts::PromptVariant;
    use async_trait::async_trait;
    use std::io::{self, Cursor};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingBackend {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl InferenceBackend for RecordingBackend {
        async fn query(&self, prompt: &str) -> Result<String, ScdError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("| TC-01 | Initial load |".into())
        }
    }

    struct RefusingBackend;

    #[async_trait]
    impl InferenceBackend for RefusingBackend {
        async fn query(&self, _prompt: &str) -> Result<String, ScdError> {
            Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused").into())
        }
    }

    fn form() -> FormInput {
        FormInput {
            variant: PromptVariant::Type1,
            source_table: "src_customer_dim".into(),
            target_table: "dim_customer".into(),
            business_keys: "customer_id".into(),
            attribute_columns: "name,status,type".into(),
            ..FormInput::default()
        }
    }

    #[tokio::test]
    async fn sends_built_prompt_and_returns_text() {
        let orchestrator = Orchestrator::new(RecordingBackend::default());
        let outcome = orchestrator.generate(&form()).await;

        assert_eq!(outcome, Outcome::Generated("| TC-01 | Initial load |".into()));
        let sent = orchestrator.backend.prompts.lock().unwrap();
        assert_eq!(sent.as_slice(), [prompts::build_prompt(&form())]);
    }

    #[tokio::test]
    async fn identical_requests_are_not_cached() {
        let orchestrator = Orchestrator::new(RecordingBackend::default());
        orchestrator.generate(&form()).await;
        orchestrator.generate(&form()).await;
        assert_eq!(orchestrator.backend.prompts.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn transport_error_becomes_failed_outcome() {
        let outcome = Orchestrator::new(RefusingBackend).generate(&form()).await;
        match outcome {
            Outcome::Failed(message) => assert!(message.contains("connection refused")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    async fn session(backend: impl InferenceBackend, script: &str) -> String {
        let mut collector = FormCollector::new(Cursor::new(script.to_string()), Vec::new());
        Orchestrator::new(backend)
            .run_interactive(&mut collector, "deepseek-scd-qa")
            .await
            .unwrap();
        String::from_utf8(collector.output_mut().clone()).unwrap()
    }

    #[tokio::test]
    async fn session_renders_generated_block() {
        let shown = session(RecordingBackend::default(), "\n\n\n\n\n.\ny\nn\n").await;
        assert!(shown.contains("`deepseek-scd-qa`"));
        assert!(shown.contains("```markdown\n| TC-01 | Initial load |\n```\n"));
        assert!(shown.trim_end().ends_with(presenter::FOOTER));
    }

    #[tokio::test]
    async fn session_survives_failure_and_allows_retrigger() {
        let shown = session(RefusingBackend, "\n\n\n\n\n.\n\ny\n\n\n\n\n\n.\n\n").await;
        assert_eq!(shown.matches("❌ Error:").count(), 2);
        assert!(shown.contains("connection refused"));
        assert!(!shown.contains("```markdown"));
    }

    #[tokio::test]
    async fn declining_trigger_skips_the_call() {
        let backend = RecordingBackend::default();
        let mut collector = FormCollector::new(Cursor::new("\n\n\n\n\n.\nn\n"), Vec::new());
        let orchestrator = Orchestrator::new(backend);
        orchestrator.run_interactive(&mut collector, "deepseek-scd-qa").await.unwrap();
        assert!(orchestrator.backend.prompts.lock().unwrap().is_empty());
    }
}
