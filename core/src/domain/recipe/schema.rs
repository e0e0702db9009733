use serde_json::json;

/// Returns the JSON schema for recipe LLM responses
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "mealName": { "type": "string", "description": "献立名（例：疲労回復！スタミナ満点定食）" },
            "mainDish": { "type": "string", "description": "主菜の料理名" },
            "sideDish": { "type": "string", "description": "副菜の料理名" },
            "soup": { "type": "string", "description": "汁物の料理名" },
            "stapleAmount": { "type": "string", "description": "主食の量の目安を子どもの手のひらで表したもの（例：子どもの手のひら1.5杯分）" },
            "cookTime": { "type": "string", "description": "全体の調理時間（例：約20分）" },
            "nutrition": {
                "type": "object",
                "properties": {
                    "energy": { "type": "string", "description": "総エネルギー（例：約650kcal）" },
                    "protein": { "type": "string", "description": "たんぱく質量（例：約30g）" },
                    "fat": { "type": "string", "description": "脂質量（例：約20g）" },
                    "carbs": { "type": "string", "description": "炭水化物量（例：約80g）" }
                },
                "required": ["energy", "protein", "fat", "carbs"]
            },
            "nutritionistComment": { "type": "string", "description": "運動後の子どもに向いている理由を説明する管理栄養士のコメント" },
            "shoppingList": { "type": "array", "items": { "type": "string" }, "description": "手持ち以外に買い足す食材" },
            "alternativeIngredients": { "type": "array", "items": { "type": "string" }, "description": "食材が手に入らないときの代替案" },
            "tipsForKids": { "type": "string", "description": "子どもが食べやすくなる工夫や声かけ" }
        },
        "required": [
            "mealName",
            "mainDish",
            "sideDish",
            "soup",
            "stapleAmount",
            "cookTime",
            "nutrition",
            "nutritionistComment",
            "shoppingList",
            "alternativeIngredients",
            "tipsForKids"
        ]
    })
}
