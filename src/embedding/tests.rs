use super::*;
use std::path::PathBuf;

mod config_tests {
    use super::*;

    #[test]
    fn test_embedder_config_default() {
        let config = EmbedderConfig::default();
        assert_eq!(config.embedding_dim, QUERY_EMBEDDING_DIM);
        assert_eq!(config.max_seq_len, QUERY_MAX_SEQ_LEN);
        assert!(!config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_embedder_config_paths() {
        let config = EmbedderConfig::new("/models/minilm");
        assert_eq!(config.config_path(), PathBuf::from("/models/minilm/config.json"));
        assert_eq!(
            config.tokenizer_path(),
            PathBuf::from("/models/minilm/tokenizer.json")
        );
        assert_eq!(
            config.weights_path(),
            PathBuf::from("/models/minilm/model.safetensors")
        );
    }

    #[test]
    fn test_embedder_config_stub_validates() {
        assert!(EmbedderConfig::stub().validate().is_ok());
    }

    #[test]
    fn test_embedder_config_empty_dir_rejected() {
        let config = EmbedderConfig::default();
        assert!(matches!(
            config.validate(),
            Err(EmbeddingError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_embedder_config_missing_model_rejected() {
        let config = EmbedderConfig::new("/nonexistent/minilm");
        assert!(matches!(
            config.validate(),
            Err(EmbeddingError::ModelNotFound { .. })
        ));
    }

    #[test]
    fn test_embedder_config_zero_dim_rejected() {
        let config = EmbedderConfig {
            model_dir: PathBuf::from("/models/minilm"),
            embedding_dim: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EmbeddingError::InvalidConfig { .. })
        ));
    }
}

mod stub_tests {
    use super::*;

    fn stub_embedder() -> QueryEmbedder {
        QueryEmbedder::load(EmbedderConfig::stub()).expect("stub embedder should load")
    }

    #[test]
    fn test_stub_embedder_loads() {
        let embedder = stub_embedder();
        assert!(embedder.is_stub());
        assert_eq!(embedder.embedding_dim(), QUERY_EMBEDDING_DIM);
    }

    #[test]
    fn test_stub_embedding_dimension() {
        let embedder = stub_embedder();
        let embedding = embedder.embed("where is my order?").unwrap();
        assert_eq!(embedding.len(), QUERY_EMBEDDING_DIM);
    }

    #[test]
    fn test_stub_embedding_deterministic() {
        let embedder = stub_embedder();
        let a = embedder.embed("do you ship to Canada?").unwrap();
        let b = embedder.embed("do you ship to Canada?").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stub_embedding_distinct_texts_differ() {
        let embedder = stub_embedder();
        let a = embedder.embed("payment methods").unwrap();
        let b = embedder.embed("return policy").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_stub_embedding_is_normalized() {
        let embedder = stub_embedder();
        let embedding = embedder.embed("gift cards").unwrap();
        let norm: f32 = embedding.iter().map(|v| v.to_f32() * v.to_f32()).sum();
        assert!((norm.sqrt() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_stub_embed_batch_matches_single() {
        let embedder = stub_embedder();
        let batch = embedder.embed_batch(&["a", "b"]).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], embedder.embed("a").unwrap());
        assert_eq!(batch[1], embedder.embed("b").unwrap());
    }

    #[test]
    fn test_stub_embed_batch_empty() {
        let embedder = stub_embedder();
        assert!(embedder.embed_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_self_similarity_is_maximal() {
        let embedder = stub_embedder();
        let a = embedder.embed("how long does delivery take?").unwrap();
        let b = embedder.embed("something else entirely").unwrap();

        let self_score = cosine_similarity_f16(&a, &a);
        let cross_score = cosine_similarity_f16(&a, &b);
        assert!(self_score > cross_score);
        assert!((self_score - 1.0).abs() < 1e-3);
    }
}
