use tracing::{info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diary::ports::DiaryRepository,
    food::ports::FoodRepository,
    meal::ports::MealRepository,
    nutrition::{
        entities::MacroEstimate,
        extractor::extract_nutrient_record,
        ports::{LLMClient, NutritionService},
        prompt::{macro_estimate_request, simplified_macro_estimate_request},
        value_objects::EstimateMacrosInput,
    },
};

const RESPONSE_PREVIEW_CHARS: usize = 150;

/// Asks the model for the macros of `description` and returns its raw text.
///
/// When the first answer carries no `{`, a simplified request is sent once.
pub async fn request_macro_text<L: LLMClient>(
    llm_client: &L,
    description: &str,
) -> Result<String, CoreError> {
    let text = llm_client
        .generate_text(macro_estimate_request(description))
        .await?;
    if text.contains('{') {
        return Ok(text);
    }

    warn!("model answered without JSON, retrying with the simplified prompt");
    let text = llm_client
        .generate_text(simplified_macro_estimate_request(description))
        .await
        .map_err(|e| {
            warn!("simplified macro request failed: {}", e);
            CoreError::ExternalServiceError(
                "Gemini did not return JSON. Try again in a few seconds.".to_string(),
            )
        })?;

    if !text.contains('{') {
        let preview: String = text.chars().take(RESPONSE_PREVIEW_CHARS).collect();
        let preview = if preview.is_empty() {
            "empty".to_string()
        } else {
            preview
        };

        return Err(CoreError::ExternalServiceError(format!(
            "Gemini did not return JSON. Response: {preview}"
        )));
    }

    Ok(text)
}

impl<F, M, D, LLM> NutritionService for Service<F, M, D, LLM>
where
    F: FoodRepository,
    M: MealRepository,
    D: DiaryRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, input))]
    async fn estimate_macros(&self, input: EstimateMacrosInput) -> Result<MacroEstimate, CoreError> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(CoreError::Invalid(
                "the food description must not be empty".to_string(),
            ));
        }

        let text = request_macro_text(self.llm_client.as_ref(), description).await?;
        let estimate = extract_nutrient_record(&text)?.into_estimate();
        info!(macros = %estimate.macros, serving = %estimate.serving, "macros estimated");

        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nutrition::{
        extractor::ExtractionError, ports::MockLLMClient, value_objects::GenerationRequest,
    };
    use crate::test_support::memory_service_with;

    fn is_full_prompt(request: &GenerationRequest) -> bool {
        request.system_instruction.is_some()
    }

    fn is_simplified_prompt(request: &GenerationRequest) -> bool {
        request.system_instruction.is_none()
    }

    #[tokio::test]
    async fn test_uses_first_answer_when_it_has_json() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .withf(is_full_prompt)
            .times(1)
            .returning(|_| Box::pin(async { Ok(r#"{"calorias": 10}"#.to_string()) }));

        let text = request_macro_text(&llm, "alface").await.unwrap();

        assert_eq!(text, r#"{"calorias": 10}"#);
    }

    #[tokio::test]
    async fn test_falls_back_to_simplified_prompt() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .withf(is_full_prompt)
            .times(1)
            .returning(|_| Box::pin(async { Ok("Here is the JSON you asked for".to_string()) }));
        llm.expect_generate_text()
            .withf(|request| is_simplified_prompt(request) && request.prompt.ends_with("Comida: maçã"))
            .times(1)
            .returning(|_| Box::pin(async { Ok(r#"{"calorias": 95}"#.to_string()) }));

        let text = request_macro_text(&llm, "maçã").await.unwrap();

        assert_eq!(text, r#"{"calorias": 95}"#);
    }

    #[tokio::test]
    async fn test_fallback_without_json_reports_preview() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .withf(is_full_prompt)
            .times(1)
            .returning(|_| Box::pin(async { Ok("não sei".to_string()) }));
        llm.expect_generate_text()
            .withf(is_simplified_prompt)
            .times(1)
            .returning(|_| Box::pin(async { Ok(String::new()) }));

        let err = request_macro_text(&llm, "pizza").await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Gemini did not return JSON. Response: empty"
        );
    }

    #[tokio::test]
    async fn test_fallback_preview_is_truncated() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .withf(is_full_prompt)
            .times(1)
            .returning(|_| Box::pin(async { Ok("sem json".to_string()) }));
        llm.expect_generate_text()
            .withf(is_simplified_prompt)
            .times(1)
            .returning(|_| Box::pin(async { Ok("a".repeat(400)) }));

        let err = request_macro_text(&llm, "pizza").await.unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Gemini did not return JSON. Response: {}", "a".repeat(150))
        );
    }

    #[tokio::test]
    async fn test_fallback_error_asks_to_try_again() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .withf(is_full_prompt)
            .times(1)
            .returning(|_| Box::pin(async { Ok("sem json".to_string()) }));
        llm.expect_generate_text()
            .withf(is_simplified_prompt)
            .times(1)
            .returning(|_| {
                Box::pin(async { Err(CoreError::ExternalServiceError("Gemini: 500".to_string())) })
            });

        let err = request_macro_text(&llm, "pizza").await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Gemini did not return JSON. Try again in a few seconds."
        );
    }

    #[tokio::test]
    async fn test_first_request_error_is_returned_as_is() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().times(1).returning(|_| {
            Box::pin(async {
                Err(CoreError::ServiceNotConfigured(
                    "GEMINI_API_KEY is not configured".to_string(),
                ))
            })
        });

        let err = request_macro_text(&llm, "pizza").await.unwrap_err();

        assert!(matches!(err, CoreError::ServiceNotConfigured(_)));
    }

    #[tokio::test]
    async fn test_estimate_macros_rounds_and_defaults_serving() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().times(1).returning(|_| {
            Box::pin(async {
                Ok("```json\n{\"calorias\": 349.6, \"proteinas\": \"25.04\", \"carboidratos\": 40.16, \"gorduras\": 9.96}\n```"
                    .to_string())
            })
        });
        let service = memory_service_with(llm);

        let estimate = service
            .estimate_macros(EstimateMacrosInput {
                description: "1 prato de macarrão".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(estimate.macros.calories, 350.0);
        assert_eq!(estimate.macros.protein, 25.0);
        assert_eq!(estimate.macros.carbohydrates, 40.2);
        assert_eq!(estimate.macros.fat, 10.0);
        assert_eq!(estimate.serving, "1 porção");
    }

    #[tokio::test]
    async fn test_estimate_macros_rejects_blank_description() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().never();
        let service = memory_service_with(llm);

        let result = service
            .estimate_macros(EstimateMacrosInput {
                description: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_estimate_macros_surfaces_malformed_object() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .times(1)
            .returning(|_| Box::pin(async { Ok("{calorias: 200}".to_string()) }));
        let service = memory_service_with(llm);

        let result = service
            .estimate_macros(EstimateMacrosInput {
                description: "bolo".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(CoreError::Extraction(ExtractionError::MalformedObject { .. }))
        ));
    }
}
