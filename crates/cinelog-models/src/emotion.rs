use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed emotion vocabulary of the review form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Moved,
    Neutral,
    Sad,
}

impl Emotion {
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Moved => "moved",
            Emotion::Neutral => "neutral",
            Emotion::Sad => "sad",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moved" => Ok(Emotion::Moved),
            "neutral" => Ok(Emotion::Neutral),
            "sad" => Ok(Emotion::Sad),
            other => Err(format!(
                "unknown emotion '{}'; expected moved, neutral, or sad",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for emotion in [Emotion::Moved, Emotion::Neutral, Emotion::Sad] {
            assert_eq!(emotion.label().parse::<Emotion>().unwrap(), emotion);
        }
        assert!("angry".parse::<Emotion>().is_err());
    }
}
