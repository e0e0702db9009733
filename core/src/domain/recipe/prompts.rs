use crate::domain::profile::{entities::Profile, exclusions::ExclusionSet};

pub const RECIPE_SYSTEM_INSTRUCTION: &str = "\
あなたは、スポーツに打ち込む小学生の保護者を支える管理栄養士です。渡された食材と家族のプロフィールをもとに、成長と運動後の回復を助ける夕食の献立を一つ提案してください。次のルールは必ず守ってください。

# 話し方
- 専門的な内容を、やさしく安心できる口調で伝えます。
- 忙しい保護者でもすぐ実践できる、簡単なアドバイスを心がけます。

# 献立づくりのルール
1. 対象: プロフィールにある子ども全員。年齢と運動量の違いを踏まえ、全員が食べられる献立にします。プロフィールがなければ、10歳で運動量が中程度の小学生を想定します。
2. 目的: 運動後の疲労回復と成長のサポート。
3. 難易度: Easy は料理初心者向け、Normal は標準、Advanced は料理に慣れた人向けです。指定された難易度に合わせて工程数と調理時間を調整します。
4. 時間: Normal なら全体で20分以内を目安にし、難易度に応じて前後させます。
5. 栄養の目安: エネルギー500〜750kcal、たんぱく質20〜40g、脂質はエネルギーの20〜30%、塩分2.5g以下。
6. 重点栄養素: 鉄分、カルシウム、ビタミンCが多い食材を積極的に使います。
7. 構成: 主菜・副菜・汁物の3品を基本とし、主食の量は子どもの手のひらで表します。
8. 調理器具: フライパン、炊飯器、電子レンジ、オーブントースターなど家庭にある道具だけを使います。
9. 食材: 渡された食材をできるだけ使い切ります。足りない食材は買い足しリストに入れます。指定がなければ旬の食材や家庭によくある食材を使います。
10. 苦手とアレルギー: 除外する食材は、レシピ、代替案、買い足しリストのどこにも含めません。これは最優先です。
11. 出力: 日本語のJSONだけを返し、ほかの文章は書かないでください。";

const NO_PROFILE_SUMMARY: &str =
    "指定なし。一般的な小学生（10歳、運動量は中程度、難易度Normal）を想定してください。";

const NO_INGREDIENT_SUMMARY: &str =
    "指定なし。旬の食材や一般家庭によくある食材を活用してください。";

fn summarize_profiles(profiles: &[Profile]) -> String {
    if profiles.is_empty() {
        return NO_PROFILE_SUMMARY.to_string();
    }

    profiles
        .iter()
        .map(|profile| {
            format!(
                "- {} ({}歳, 運動強度: {}, 希望難易度: {})",
                profile.name, profile.age, profile.exercise_intensity, profile.difficulty
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "なし".to_string()
    } else {
        names.join(", ")
    }
}

/// Builds the user prompt for a dinner request.
///
/// An empty `ingredients` slice produces the "chef's choice" wording, and
/// `recent_meals` is only mentioned when non-empty.
pub fn build_recipe_prompt(
    profiles: &[Profile],
    exclusions: &ExclusionSet,
    ingredients: &[String],
    recent_meals: &[String],
) -> String {
    let ingredients_summary = if ingredients.is_empty() {
        NO_INGREDIENT_SUMMARY.to_string()
    } else {
        ingredients.join(", ")
    };

    let mut prompt = format!(
        "以下の情報をもとに、全員が食べられる夕食の献立を提案してください。\n\n\
         【お子様のプロフィール】\n{}\n\n\
         【全員に共通で除外する食材】\n- 苦手な食材: {}\n- アレルギー: {}\n\n\
         【利用可能な食材】\n{}\n",
        summarize_profiles(profiles),
        join_or_none(exclusions.disliked()),
        join_or_none(exclusions.allergies()),
        ingredients_summary,
    );

    if !recent_meals.is_empty() {
        prompt.push_str("\n【最近作ったレシピ】\n");
        prompt.push_str("次の献立は最近作ったので、これらとは違うものを提案してください:\n");
        for meal in recent_meals {
            prompt.push_str("- ");
            prompt.push_str(meal);
            prompt.push('\n');
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{
        entities::{Difficulty, ExerciseIntensity},
        exclusions::compute_exclusions,
    };

    fn profile() -> Profile {
        Profile::new(
            "ゆい".to_string(),
            11,
            ExerciseIntensity::High,
            Difficulty::Easy,
            "ピーマン".to_string(),
            "そば".to_string(),
        )
    }

    #[test]
    fn prompt_lists_profiles_exclusions_and_ingredients() {
        let profiles = vec![profile()];
        let exclusions = compute_exclusions(&profiles);
        let ingredients = vec!["鶏むね肉".to_string(), "ブロッコリー".to_string()];

        let prompt = build_recipe_prompt(&profiles, &exclusions, &ingredients, &[]);

        assert!(prompt.contains("献立"));
        assert!(prompt.contains("- ゆい (11歳, 運動強度: High, 希望難易度: Easy)"));
        assert!(prompt.contains("苦手な食材: ピーマン"));
        assert!(prompt.contains("アレルギー: そば"));
        assert!(prompt.contains("鶏むね肉, ブロッコリー"));
        assert!(!prompt.contains("最近作ったレシピ"));
    }

    #[test]
    fn prompt_falls_back_without_profiles_or_ingredients() {
        let prompt = build_recipe_prompt(&[], &ExclusionSet::new(), &[], &[]);

        assert!(prompt.contains(NO_PROFILE_SUMMARY));
        assert!(prompt.contains(NO_INGREDIENT_SUMMARY));
        assert!(prompt.contains("苦手な食材: なし"));
    }

    #[test]
    fn prompt_mentions_recent_meals() {
        let recent = vec!["カレーライス".to_string(), "焼きそば".to_string()];

        let prompt = build_recipe_prompt(&[], &ExclusionSet::new(), &[], &recent);

        assert!(prompt.contains("【最近作ったレシピ】"));
        assert!(prompt.contains("- カレーライス\n- 焼きそば\n"));
    }
}
