use candle_core::{DType, Device, Result, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;

/// Mean-pooling sentence encoder over a BERT backbone (MiniLM-class models).
pub struct BertEncoder {
    bert: BertModel,
    hidden_size: usize,
}

impl BertEncoder {
    /// Loads a BERT model from a directory with `config.json` and
    /// `model.safetensors`.
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle_core::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &config)?
        } else {
            BertModel::load(vb.clone(), &config)?
        };

        Ok(Self {
            bert,
            hidden_size: config.hidden_size,
        })
    }

    /// Hidden size of the loaded backbone.
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Runs the backbone and mean-pools the token embeddings.
    ///
    /// `input_ids` shape: `[1, seq_len]`. Returns `[hidden_size]`.
    /// Queries are encoded one at a time without padding, so the attention
    /// mask is implicit and the pool is a plain mean over the sequence axis.
    pub fn encode(&self, input_ids: &Tensor) -> Result<Tensor> {
        let token_type_ids = input_ids.zeros_like()?;
        let hidden = self.bert.forward(input_ids, &token_type_ids, None)?;
        hidden.mean(1)?.squeeze(0)
    }
}
