use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::helpers::strip_code_fences,
    recipe::entities::{Nutrition, Recipe},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeResponse {
    meal_name: String,
    main_dish: String,
    side_dish: String,
    soup: String,
    staple_amount: String,
    cook_time: String,
    nutrition: NutritionResponse,
    nutritionist_comment: String,
    #[serde(default)]
    shopping_list: Vec<String>,
    #[serde(default)]
    alternative_ingredients: Vec<String>,
    tips_for_kids: String,
}

#[derive(Deserialize)]
struct NutritionResponse {
    energy: String,
    protein: String,
    fat: String,
    carbs: String,
}

impl From<RecipeResponse> for Recipe {
    fn from(value: RecipeResponse) -> Self {
        Recipe {
            meal_name: value.meal_name,
            main_dish: value.main_dish,
            side_dish: value.side_dish,
            soup: value.soup,
            staple_amount: value.staple_amount,
            cook_time: value.cook_time,
            nutrition: Nutrition {
                energy: value.nutrition.energy,
                protein: value.nutrition.protein,
                fat: value.nutrition.fat,
                carbs: value.nutrition.carbs,
            },
            nutritionist_comment: value.nutritionist_comment,
            shopping_list: value.shopping_list,
            alternative_ingredients: value.alternative_ingredients,
            tips_for_kids: value.tips_for_kids,
        }
    }
}

/// Parses the recipe model's JSON reply.
pub fn parse_recipe_response(raw: &str) -> Result<Recipe, CoreError> {
    let cleaned = strip_code_fences(raw);

    let response: RecipeResponse = serde_json::from_str(&cleaned).map_err(|e| {
        tracing::error!(response = %cleaned, "Failed to parse recipe response: {}", e);
        CoreError::UpstreamParseFailure(format!("Failed to parse recipe response: {}", e))
    })?;

    if response.meal_name.trim().is_empty() {
        tracing::error!(response = %cleaned, "Recipe response has no meal name");
        return Err(CoreError::UpstreamParseFailure(
            "Recipe response has no meal name".to_string(),
        ));
    }

    Ok(response.into())
}

#[cfg(test)]
pub(crate) const SAMPLE_RECIPE_JSON: &str = r#"{
    "mealName": "鶏むね肉の照り焼き定食",
    "mainDish": "鶏むね肉の照り焼き",
    "sideDish": "ブロッコリーのごま和え",
    "soup": "豆腐とわかめの味噌汁",
    "stapleAmount": "子どもの手のひら1.5杯分",
    "cookTime": "約20分",
    "nutrition": { "energy": "約650kcal", "protein": "約32g", "fat": "約18g", "carbs": "約85g" },
    "nutritionistComment": "たんぱく質とカルシウムで練習後の体をしっかり回復させます。",
    "shoppingList": ["わかめ"],
    "alternativeIngredients": ["鶏もも肉でも作れます"],
    "tipsForKids": "照り焼きのたれを一緒に塗ってもらいましょう。"
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_reply() {
        let recipe = parse_recipe_response(SAMPLE_RECIPE_JSON).unwrap();

        assert_eq!(recipe.meal_name, "鶏むね肉の照り焼き定食");
        assert_eq!(recipe.nutrition.protein, "約32g");
        assert_eq!(recipe.shopping_list, vec!["わかめ"]);
    }

    #[test]
    fn parses_fenced_reply() {
        let raw = format!("```json\n{}\n```", SAMPLE_RECIPE_JSON);

        assert!(parse_recipe_response(&raw).is_ok());
    }

    #[test]
    fn rejects_non_json_reply() {
        let err = parse_recipe_response("本日のおすすめはカレーです").unwrap_err();

        assert!(matches!(err, CoreError::UpstreamParseFailure(_)));
    }

    #[test]
    fn rejects_reply_missing_fields() {
        let err = parse_recipe_response(r#"{"mealName":"カレー"}"#).unwrap_err();

        assert!(matches!(err, CoreError::UpstreamParseFailure(_)));
    }
}
