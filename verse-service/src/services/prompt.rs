//! Prompt template for the search endpoint.

/// Builds the fixed prompt around the user's statement.
///
/// The model is told to treat the statement as a lie, answer with a
/// scripture excerpt and an encouraging prayer, and emit only a JSON
/// object with `verse` and `prayer` keys.
pub fn build_prompt(user_input: &str) -> String {
    format!(
        r#"使用者說：「{user_input}」這是一句謊言。
請根據聖經真理，回應一段經文（用中文），並寫出一段鼓勵的禱告文。

請你只回傳下列格式的 JSON，不要加任何說明、標題或文字：

{{
  "verse": "經文內容（含出處）",
  "prayer": "鼓勵的禱告文"
}}"#
    )
}
