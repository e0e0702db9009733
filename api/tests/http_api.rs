use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use serde_json::{Value, json};
use supomeshi_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use supomeshi_core::{
    domain::common::services::Service,
    infrastructure::{
        clock::SystemClock,
        llm::{LLMProvider, fake_client::FakeLLMClient},
        storage::{JsonProfileRepository, JsonRecipeHistoryRepository},
    },
};
use test_context::{AsyncTestContext, test_context};

const VISION_REPLY: &str = r#"```json
[{"name":"キャベツ","confidence":0.92},{"name":"しめじ","confidence":0.35}]
```"#;

const RECIPE_REPLY: &str = r#"{
    "mealName": "豚肉とキャベツの味噌炒め定食",
    "mainDish": "豚肉とキャベツの味噌炒め",
    "sideDish": "小松菜のおひたし",
    "soup": "じゃがいもと玉ねぎの味噌汁",
    "stapleAmount": "子どもの手のひら2杯分",
    "cookTime": "約20分",
    "nutrition": { "energy": "約700kcal", "protein": "約30g", "fat": "約20g", "carbs": "約95g" },
    "nutritionistComment": "ビタミンB1が疲労回復を助けます。",
    "shoppingList": ["小松菜"],
    "alternativeIngredients": ["小松菜の代わりにほうれん草"],
    "tipsForKids": "味噌だれを一緒に混ぜてもらいましょう。"
}"#;

fn test_server(llm: FakeLLMClient) -> TestServer {
    let args = Arc::new(Args::parse_from(["supomeshi-api", "--llm-provider", "fake"]));
    let service = Service::new(
        JsonProfileRepository::in_memory(),
        JsonRecipeHistoryRepository::in_memory(),
        LLMProvider::Fake(llm),
        SystemClock,
    );

    let app = router(AppState::new(args, service)).unwrap();
    TestServer::new(app).unwrap()
}

struct ApiContext {
    server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let llm = FakeLLMClient::new()
            .with_response("食材認識", VISION_REPLY)
            .with_response("献立", RECIPE_REPLY);

        ApiContext {
            server: test_server(llm),
        }
    }
}

async fn create_profile(server: &TestServer, body: Value) -> Value {
    let response = server.post("/profiles").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["data"].clone()
}

#[test_context(ApiContext)]
#[tokio::test]
async fn profile_lifecycle(ctx: &mut ApiContext) {
    let created = create_profile(
        &ctx.server,
        json!({ "name": "たろう", "age": 9, "disliked_ingredients": "ピーマン" }),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["exercise_intensity"], "Medium");
    assert_eq!(created["difficulty"], "Normal");

    let updated = ctx
        .server
        .put(&format!("/profiles/{}", id))
        .json(&json!({ "difficulty": "Advanced" }))
        .await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<Value>()["data"]["difficulty"], "Advanced");
    assert_eq!(updated.json::<Value>()["data"]["name"], "たろう");

    let list = ctx.server.get("/profiles").await;
    assert_eq!(list.json::<Value>()["data"].as_array().unwrap().len(), 1);

    ctx.server
        .delete(&format!("/profiles/{}", id))
        .await
        .assert_status_ok();
    ctx.server
        .get(&format!("/profiles/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn blank_profile_name_is_rejected(ctx: &mut ApiContext) {
    let response = ctx.server.post("/profiles").json(&json!({ "name": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "E_BAD_REQUEST");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn out_of_range_age_is_rejected(ctx: &mut ApiContext) {
    for age in [5, 13] {
        let response = ctx
            .server
            .post("/profiles")
            .json(&json!({ "name": "たろう", "age": age }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    let profile = create_profile(&ctx.server, json!({ "name": "たろう", "age": 6 })).await;
    ctx.server
        .put(&format!("/profiles/{}", profile["id"].as_str().unwrap()))
        .json(&json!({ "age": 13 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn deleting_unknown_profile_is_not_found(ctx: &mut ApiContext) {
    ctx.server
        .delete("/profiles/0190a9d8-7a4e-7c3b-8f00-000000000000")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn analyze_merges_photo_and_text(ctx: &mut ApiContext) {
    let profile = create_profile(&ctx.server, json!({ "name": "はなこ" })).await;

    let form = MultipartForm::new()
        .add_text("manual_text", "豚肉 キャベツ")
        .add_text("profile_id", profile["id"].as_str().unwrap().to_string())
        .add_part(
            "image",
            Part::bytes(vec![0xff, 0xd8, 0xff, 0xe0])
                .file_name("fridge.jpg")
                .mime_type("image/jpeg"),
        );
    let response = ctx.server.post("/ingredients/analyze").multipart(form).await;

    response.assert_status_ok();
    let data = &response.json::<Value>()["data"];
    assert_eq!(data["confirmed"], json!(["豚肉", "キャベツ"]));
    assert_eq!(data["suggestions"][0]["name"], "しめじ");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn analyze_without_profile_is_rejected(ctx: &mut ApiContext) {
    let form = MultipartForm::new().add_text("manual_text", "卵");

    let response = ctx.server.post("/ingredients/analyze").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn generate_records_history(ctx: &mut ApiContext) {
    let profile = create_profile(&ctx.server, json!({ "name": "じろう", "allergies": "えび" })).await;

    let response = ctx
        .server
        .post("/recipes/generate")
        .json(&json!({
            "profile_ids": [profile["id"]],
            "confirmed_ingredients": ["豚肉", "えび", "キャベツ"]
        }))
        .await;

    response.assert_status_ok();
    let data = &response.json::<Value>()["data"];
    assert_eq!(data["recipe"]["meal_name"], "豚肉とキャベツの味噌炒め定食");
    assert_eq!(data["ingredients"], json!(["豚肉", "キャベツ"]));
    assert_eq!(data["excluded_ingredients"], json!(["えび"]));

    let history = ctx.server.get("/recipes/history").await;
    let items = history.json::<Value>()["data"].clone();
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["meal_name"], "豚肉とキャベツの味噌炒め定食");
    assert!(items[0]["generated_at"].is_i64());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn all_excluded_is_unprocessable(ctx: &mut ApiContext) {
    let profile = create_profile(&ctx.server, json!({ "name": "さくら", "disliked_ingredients": "なす" })).await;

    let response = ctx
        .server
        .post("/recipes/generate")
        .json(&json!({
            "profile_ids": [profile["id"]],
            "confirmed_ingredients": ["なす"]
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn omakase_works_without_profiles(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recipes/omakase")
        .json(&json!({ "profile_ids": [] }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["ingredients"], json!([]));
}

#[tokio::test]
async fn garbage_model_reply_is_bad_gateway() {
    let server = test_server(FakeLLMClient::new().with_response("献立", "すみません、今日は休業です"));
    let profile = create_profile(&server, json!({ "name": "けんた" })).await;

    let response = server
        .post("/recipes/generate")
        .json(&json!({
            "profile_ids": [profile["id"]],
            "confirmed_ingredients": ["鶏肉"]
        }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.json::<Value>()["message"],
        "AI request failed, please retry"
    );
    let history = server.get("/recipes/history").await;
    assert_eq!(history.json::<Value>()["data"], json!([]));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn health_and_config_respond(ctx: &mut ApiContext) {
    ctx.server.get("/health").await.assert_status_ok();

    let config = ctx.server.get("/config").await;
    config.assert_status_ok();
    assert_eq!(config.json::<Value>()["llm_provider"], "fake");
}
