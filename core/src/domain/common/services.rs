use crate::domain::label_analysis::ports::LLMClient;

/// Application service wiring the domain logic to its outbound adapters.
#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }
}
