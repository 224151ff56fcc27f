use super::*;

#[test]
fn test_catalog_has_eleven_models() {
    assert_eq!(MODEL_CATALOG.len(), 11);
}

#[test]
fn test_catalog_aliases_unique() {
    let mut aliases: Vec<_> = MODEL_CATALOG.iter().map(|s| s.alias).collect();
    aliases.sort_unstable();
    aliases.dedup();
    assert_eq!(aliases.len(), MODEL_CATALOG.len());
}

#[test]
fn test_catalog_covers_all_providers() {
    for provider in [
        Provider::OpenAi,
        Provider::Anthropic,
        Provider::Google,
        Provider::TogetherAi,
    ] {
        assert!(
            MODEL_CATALOG.iter().any(|s| s.provider == provider),
            "no catalog entry for provider {provider}"
        );
    }
}

#[test]
fn test_find_model_known_alias() {
    let spec = find_model("gpt4omini").expect("alias should resolve");
    assert_eq!(spec.provider, Provider::OpenAi);
    assert_eq!(spec.model_id, "gpt-4o-mini");
}

#[test]
fn test_find_model_unknown_alias() {
    let err = find_model("nonexistent").unwrap_err();
    assert!(matches!(err, ProviderError::UnknownAlias { .. }));
}

#[test]
fn test_provider_credential_env_names() {
    assert_eq!(Provider::OpenAi.credential_env(), "OPENAI_API_KEY");
    assert_eq!(Provider::Anthropic.credential_env(), "ANTHROPIC_API_KEY");
    assert_eq!(Provider::Google.credential_env(), "GEMINI_API_KEY");
    assert_eq!(Provider::TogetherAi.credential_env(), "TOGETHER_API_KEY");
}

#[test]
fn test_provider_display() {
    assert_eq!(Provider::TogetherAi.to_string(), "togetherai");
}

#[tokio::test]
async fn test_mock_chat_fixed_reply() {
    let backend = MockChat::fixed("FAQ-Agent");
    assert_eq!(backend.generate("sys", "query").await.unwrap(), "FAQ-Agent");
    assert_eq!(backend.generate("sys", "again").await.unwrap(), "FAQ-Agent");
}

#[tokio::test]
async fn test_mock_chat_scripted_then_fallback() {
    let backend = MockChat::scripted(["first", "second"], "fallback");
    assert_eq!(backend.generate("", "").await.unwrap(), "first");
    assert_eq!(backend.generate("", "").await.unwrap(), "second");
    assert_eq!(backend.generate("", "").await.unwrap(), "fallback");
}
