//! FAQ entries.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{Draft, Resource, require};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(alias = "_id")]
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl Resource for Faq {
    const KIND: &'static str = "faqs";
    const TITLE: &'static str = "faq";

    type Draft = FaqDraft;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
}

impl FaqDraft {
    pub fn from_record(record: &Faq) -> Self {
        Self {
            question: record.question.clone(),
            answer: record.answer.clone(),
        }
    }
}

impl Draft for FaqDraft {
    fn validate(&self) -> Result<()> {
        require(&[
            ("question", !self.question.is_empty()),
            ("answer", !self.answer.is_empty()),
        ])
    }
}
