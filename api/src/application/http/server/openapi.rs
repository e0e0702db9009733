use crate::application::http::{
    ingredient::router::IngredientApiDoc, profile::router::ProfileApiDoc,
    recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Supomeshi API",
        description = "Dinner planning for families of young athletes"
    ),
    nest(
        (path = "/profiles", api = ProfileApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
    )
)]
pub struct ApiDoc;
