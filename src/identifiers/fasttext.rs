//! Fasttext identifier
use std::path::Path;

use fasttext::{FastText as FastTextLib, Prediction};
use oxilangtag::LanguageTag;

use crate::error::Error;

use super::identification::Identification;
use super::Identifier;

/// Clean the prediction label field from `__label__xx` into `xx`.
///
/// # Errors
/// Returns an error if the provided label is too short to carry the
/// `__label__` prefix.
fn clean_prediction(prediction: &Prediction) -> Result<Prediction, String> {
    if prediction.label.chars().count() < 9 {
        return Err(format!(
            "Label is too short to be cleaned: {}",
            prediction.label
        ));
    }
    Ok(Prediction {
        prob: prediction.prob,
        label: prediction.label.chars().skip(9).collect(),
    })
}

/// Holds a [fasttext::FastText] instance and its parameters:
/// - k, number of predicted languages on a text
/// - threshold, prediction threshold
pub struct FastText {
    predictor: FastTextLib,
    pub k: i32,
    pub threshold: f32,
}

impl FastText {
    /// Create a new fasttext classifier.
    ///
    /// filename has to be a path to a `bin` file.
    ///
    /// See [fasttext::FastText::predict] for other parameters explanation
    pub fn new(filename: &Path, k: i32, threshold: f32) -> Result<Self, Error> {
        let mut predictor = FastTextLib::new();
        let filename_str = filename.to_str();
        match filename_str {
            None => Err(Error::Custom(format!(
                "invalid filepath for lid: {filename:?}"
            ))),
            Some(filename) => {
                predictor.load_model(filename)?;
                Ok(Self {
                    predictor,
                    k,
                    threshold,
                })
            }
        }
    }

    /// predict for supplied text.
    /// returns Ok(None) if no reliable identification has been done.
    pub fn predict(&self, text: &str) -> Result<Option<Vec<Prediction>>, String> {
        let predictions = self.predictor.predict(text, self.k, self.threshold)?;

        if predictions.is_empty() {
            Ok(None)
        } else {
            // attempt to clean labels before returning
            Ok(Some(
                predictions
                    .into_iter()
                    .map(|p| clean_prediction(&p).unwrap_or(p))
                    .collect(),
            ))
        }
    }
}

impl Identifier for FastText {
    /// Identify the language of a whole text.
    ///
    /// Newlines and NUL characters are stripped beforehand: fasttext
    /// predicts on single lines and chokes on NUL.
    fn identify(&self, text: &str) -> Result<Option<Identification>, Error> {
        let flat = text.replace(['\n', '\r', char::from(0)], " ");
        let flat = flat.trim();
        if flat.is_empty() {
            return Ok(None);
        }

        let prediction = self
            .predict(flat)?
            .and_then(|preds| preds.into_iter().next());

        match prediction {
            Some(pred) => {
                // model labels use `_` where BCP-47 wants `-` (e.g. eng_Latn)
                let label = pred.label.replace('_', "-");
                let label = LanguageTag::parse_and_normalize(&label)?;
                Ok(Some(Identification::new(label, pred.prob)))
            }
            None => Ok(None),
        }
    }
}
