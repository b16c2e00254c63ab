//! Language identification result.
use oxilangtag::LanguageTag;
use serde::{Deserialize, Serialize};

/// A language identification: BCP-47 tag and confidence.
///
/// Models trained on script-qualified labels (e.g. `eng_Latn`) surface the
/// script through the tag itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identification {
    label: LanguageTag<String>,
    prob: f32,
}

impl Identification {
    pub fn new(label: LanguageTag<String>, prob: f32) -> Self {
        Self { label, prob }
    }

    pub fn label(&self) -> &LanguageTag<String> {
        &self.label
    }

    pub fn prob(&self) -> f32 {
        self.prob
    }

    /// Script subtag, when the model encodes one.
    pub fn script(&self) -> Option<&str> {
        self.label.script()
    }
}
