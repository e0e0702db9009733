use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::IngredientAnalysis, value_objects::AnalyzeIngredientsInput},
};

/// Service trait for turning photos and typed text into a confirmed ingredient list
#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn analyze_ingredients(
        &self,
        input: AnalyzeIngredientsInput,
    ) -> impl Future<Output = Result<IngredientAnalysis, CoreError>> + Send;
}
