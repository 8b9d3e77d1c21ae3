use serde::{Deserialize, Serialize};

/// Target knowledge base for an upload.
///
/// Closed set: the webhook receives the string value, the UI shows the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeBase {
    Marketing,
    Sales,
    General,
    Amazon,
}

impl KnowledgeBase {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "marketing" => Ok(KnowledgeBase::Marketing),
            "sales" => Ok(KnowledgeBase::Sales),
            "general" => Ok(KnowledgeBase::General),
            "amazon" => Ok(KnowledgeBase::Amazon),
            _ => Err(format!("Unknown knowledge base: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KnowledgeBase::Marketing => "marketing",
            KnowledgeBase::Sales => "sales",
            KnowledgeBase::General => "general",
            KnowledgeBase::Amazon => "amazon",
        }
    }

    /// Display name for the select control.
    pub fn label(&self) -> &'static str {
        match self {
            KnowledgeBase::Marketing => "Marketing Knowledge Base",
            KnowledgeBase::Sales => "Sales Knowledge Base",
            KnowledgeBase::General => "Knowledge Base",
            KnowledgeBase::Amazon => "Amazon Knowledge Base",
        }
    }

    /// All selectable knowledge bases, in display order.
    pub fn all() -> [KnowledgeBase; 4] {
        [
            KnowledgeBase::Marketing,
            KnowledgeBase::Sales,
            KnowledgeBase::General,
            KnowledgeBase::Amazon,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for kb in KnowledgeBase::all() {
            assert_eq!(KnowledgeBase::from_str(kb.as_str()), Ok(kb));
        }
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert!(KnowledgeBase::from_str("finance").is_err());
        assert!(KnowledgeBase::from_str("").is_err());
    }

    #[test]
    fn test_serializes_as_value_string() {
        let json = serde_json::to_string(&KnowledgeBase::Amazon).unwrap();
        assert_eq!(json, "\"amazon\"");
    }
}
