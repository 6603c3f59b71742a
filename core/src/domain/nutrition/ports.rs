use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{
        entities::MacroEstimate,
        value_objects::{EstimateMacrosInput, GenerationRequest},
    },
};

/// LLM Client trait for calling text-generation models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_text(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for AI macro estimation
#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    fn estimate_macros(
        &self,
        input: EstimateMacrosInput,
    ) -> impl Future<Output = Result<MacroEstimate, CoreError>> + Send;
}
