use crate::domain::nutrition::value_objects::GenerationRequest;

const TEMPERATURE: f32 = 0.2;
const MAX_OUTPUT_TOKENS: u32 = 500;

const SYSTEM_INSTRUCTION: &str = r#"Você é um nutricionista. Para a descrição de comida fornecida, responda com UM ÚNICO bloco: um objeto JSON válido, sem nenhuma frase antes ou depois. Não escreva "Here is the JSON" nem qualquer texto introdutório.

Formato obrigatório do JSON (use exatamente estas chaves):
{"calorias": número, "proteinas": número, "carboidratos": número, "gorduras": número, "porcao": "string"}

Exemplo de resposta válida:
{"calorias": 350, "proteinas": 25, "carboidratos": 40, "gorduras": 10, "porcao": "1 prato médio"}

Seja realista nos valores. Retorne só o JSON, começando com { e terminando com }."#;

/// Full request: nutritionist system instruction plus the description.
pub fn macro_estimate_request(description: &str) -> GenerationRequest {
    GenerationRequest {
        system_instruction: Some(SYSTEM_INSTRUCTION.to_string()),
        prompt: format!(
            "Estime os valores nutricionais para: {description}\n\nResponda somente com o objeto JSON, sem nenhum texto antes ou depois."
        ),
        temperature: TEMPERATURE,
        max_output_tokens: MAX_OUTPUT_TOKENS,
    }
}

/// Single-message request used when the full request returned no JSON.
pub fn simplified_macro_estimate_request(description: &str) -> GenerationRequest {
    GenerationRequest {
        system_instruction: None,
        prompt: format!(
            "Para esta comida, retorne APENAS um JSON com: calorias, proteinas, carboidratos, gorduras (números), porcao (string). Nada mais.\nComida: {description}"
        ),
        temperature: TEMPERATURE,
        max_output_tokens: MAX_OUTPUT_TOKENS,
    }
}
