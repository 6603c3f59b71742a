use crate::application::http::{
    diary::router::DiaryApiDoc, food::router::FoodApiDoc, health::HealthApiDoc,
    meal::router::MealApiDoc, nutrition::router::NutritionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dieta API"
    ),
    nest(
        (path = "/estimate-macros", api = NutritionApiDoc),
        (path = "/foods", api = FoodApiDoc),
        (path = "/meals", api = MealApiDoc),
        (path = "/diary", api = DiaryApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
