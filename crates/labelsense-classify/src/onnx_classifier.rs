//! ONNX-based multi-label classifier.
//!
//! Loads a fine-tuned sequence-classification model exported to ONNX plus its
//! HuggingFace tokenizer, and scores whole phrase batches in one session run.
//! Output logits are `[batch, 4]`; sigmoid (not softmax) because the four
//! labels are independent, not mutually exclusive. Requires the `onnx`
//! feature.

#[cfg(feature = "onnx")]
mod inner {
    use std::path::Path;
    use std::sync::Arc;

    use ort::session::Session;
    use ort::value::Tensor;
    use parking_lot::Mutex;
    use tokenizers::Tokenizer;
    use tracing::info;

    use labelsense_core::{DietLabel, Error, Result};

    use crate::backend::{ClassifierBackend, LabelScores};

    /// Maximum sequence length for the model. Ingredient phrases are short;
    /// this only guards against pathological OCR output.
    const MAX_SEQ_LEN: usize = 128;

    /// ONNX multi-label classifier over the four diet labels.
    pub struct OnnxClassifier {
        session: Arc<Mutex<Session>>,
        tokenizer: Tokenizer,
    }

    impl OnnxClassifier {
        /// Load an ONNX model and tokenizer from the given directory.
        ///
        /// Expects:
        /// - `model_dir/model.onnx` — the ONNX model file
        /// - `model_dir/tokenizer.json` — the HuggingFace tokenizer
        pub fn load(model_dir: &Path) -> std::result::Result<Self, String> {
            let model_path = model_dir.join("model.onnx");
            let tokenizer_path = model_dir.join("tokenizer.json");

            if !model_path.exists() {
                return Err(format!("Model not found: {}", model_path.display()));
            }
            if !tokenizer_path.exists() {
                return Err(format!("Tokenizer not found: {}", tokenizer_path.display()));
            }

            // Initialize ONNX Runtime environment.
            // With load-dynamic feature, ORT_DYLIB_PATH env var must point to libonnxruntime.so
            ort::init().commit();

            let session = Session::builder()
                .map_err(|e| format!("Failed to create session builder: {}", e))?
                .with_intra_threads(2)
                .map_err(|e| format!("Failed to set threads: {}", e))?
                .commit_from_file(&model_path)
                .map_err(|e| format!("Failed to load ONNX model: {}", e))?;

            let tokenizer = Tokenizer::from_file(&tokenizer_path)
                .map_err(|e| format!("Failed to load tokenizer: {}", e))?;

            info!(
                "ONNX classifier loaded: labels={}, model={}",
                DietLabel::ALL.len(),
                model_path.display()
            );

            Ok(Self {
                session: Arc::new(Mutex::new(session)),
                tokenizer,
            })
        }

        /// Tokenize the batch and pad every row to the batch maximum.
        fn encode_batch(&self, phrases: &[&str]) -> Result<(Vec<i64>, Vec<i64>, usize)> {
            let encodings = self
                .tokenizer
                .encode_batch(phrases.to_vec(), true)
                .map_err(|e| Error::Inference(format!("Tokenization failed: {}", e)))?;

            let seq_len = encodings
                .iter()
                .map(|e| e.get_ids().len().min(MAX_SEQ_LEN))
                .max()
                .unwrap_or(1)
                .max(1);

            let mut ids = Vec::with_capacity(phrases.len() * seq_len);
            let mut mask = Vec::with_capacity(phrases.len() * seq_len);
            for encoding in &encodings {
                let row_ids = encoding.get_ids();
                let row_mask = encoding.get_attention_mask();
                let used = row_ids.len().min(seq_len);
                ids.extend(row_ids[..used].iter().map(|&id| id as i64));
                mask.extend(row_mask[..used].iter().map(|&m| m as i64));
                // Pad to the batch maximum
                ids.extend(std::iter::repeat(0i64).take(seq_len - used));
                mask.extend(std::iter::repeat(0i64).take(seq_len - used));
            }

            Ok((ids, mask, seq_len))
        }
    }

    impl ClassifierBackend for OnnxClassifier {
        fn score_batch(&self, phrases: &[&str]) -> Result<Vec<LabelScores>> {
            let batch = phrases.len();
            let (ids, mask, seq_len) = self.encode_batch(phrases)?;
            let type_ids = vec![0i64; batch * seq_len];

            let ids_tensor = Tensor::from_array(([batch, seq_len], ids))
                .map_err(|e| Error::Inference(format!("Failed to create ids tensor: {}", e)))?;
            let mask_tensor = Tensor::from_array(([batch, seq_len], mask))
                .map_err(|e| Error::Inference(format!("Failed to create mask tensor: {}", e)))?;
            let type_ids_tensor = Tensor::from_array(([batch, seq_len], type_ids))
                .map_err(|e| Error::Inference(format!("Failed to create type_ids tensor: {}", e)))?;

            let mut session = self.session.lock();
            let outputs = session
                .run(ort::inputs![ids_tensor, mask_tensor, type_ids_tensor])
                .map_err(|e| Error::Inference(format!("ONNX inference failed: {}", e)))?;

            // Sequence-classification head: logits [batch, num_labels]
            let (shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| Error::Inference(format!("Failed to extract logits: {}", e)))?;

            let shape_dims: Vec<i64> = shape.iter().copied().collect();
            let num_labels = DietLabel::ALL.len();
            if shape_dims.len() != 2
                || shape_dims[0] as usize != batch
                || shape_dims[1] as usize != num_labels
            {
                return Err(Error::Inference(format!(
                    "Unexpected logits shape: {:?} (want [{}, {}])",
                    shape_dims, batch, num_labels
                )));
            }

            let mut results = Vec::with_capacity(batch);
            for row in 0..batch {
                let offset = row * num_labels;
                let mut scores: LabelScores = [0.0; 4];
                for (i, score) in scores.iter_mut().enumerate() {
                    *score = sigmoid(data[offset + i]);
                }
                results.push(scores);
            }
            Ok(results)
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    fn sigmoid(logit: f32) -> f32 {
        1.0 / (1.0 + (-logit).exp())
    }

    #[cfg(test)]
    mod tests {
        use super::sigmoid;

        #[test]
        fn test_sigmoid_maps_logits_to_probabilities() {
            assert_eq!(sigmoid(0.0), 0.5);
            assert!(sigmoid(4.0) > 0.9);
            assert!(sigmoid(-4.0) < 0.1);
        }
    }
}

#[cfg(feature = "onnx")]
pub use inner::OnnxClassifier;
