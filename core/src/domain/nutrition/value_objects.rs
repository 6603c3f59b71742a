/// Free-text description of what was eaten, e.g. "2 ovos mexidos com torrada".
#[derive(Debug, Clone)]
pub struct EstimateMacrosInput {
    pub description: String,
}

/// A single text-generation call, independent of the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: Option<String>,
    pub prompt: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}
