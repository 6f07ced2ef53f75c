//! Analysis result types and the intensity heuristic.
//!
//! The classifier is a placeholder: the label is always
//! [`Sentiment::Neutral`], the emotions are always `[Emotion::Calm]`, and the
//! only input-dependent value is [`Intensity`], which reflects whether the text
//! contains an exclamation mark.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentiment label attached to every analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Neutral,
}

/// Emotion tag attached to every analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Calm,
}

/// How strongly the text is expressed, serialized as a bare float.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Intensity(pub f64);

impl Intensity {
    /// Intensity of text without an exclamation mark.
    pub const CALM: Intensity = Intensity(0.5);
    /// Intensity of text with at least one exclamation mark.
    pub const EMPHATIC: Intensity = Intensity(0.7);

    /// Scores `text`: [`Intensity::EMPHATIC`] if it contains `!`, otherwise
    /// [`Intensity::CALM`].
    pub fn of(text: &str) -> Self {
        if text.contains('!') {
            Intensity::EMPHATIC
        } else {
            Intensity::CALM
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of analyzing one piece of text.
///
/// Field order is the wire order: `sentiment`, `intensity`, `emotions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub sentiment: Sentiment,
    pub intensity: Intensity,
    pub emotions: Vec<Emotion>,
}

/// Analyzes `text`. Only the intensity depends on the input.
pub fn analyze(text: &str) -> Analysis {
    Analysis {
        sentiment: Sentiment::Neutral,
        intensity: Intensity::of(text),
        emotions: vec![Emotion::Calm],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_text_is_calm() {
        assert_eq!(analyze("hello there").intensity, Intensity::CALM);
    }

    #[test]
    fn empty_text_is_calm() {
        assert_eq!(analyze("").intensity, Intensity::CALM);
    }

    #[test]
    fn exclamation_is_emphatic() {
        assert_eq!(analyze("great!").intensity, Intensity::EMPHATIC);
        assert_eq!(analyze("!").intensity, Intensity::EMPHATIC);
        assert_eq!(analyze("wow!!! really").intensity, Intensity::EMPHATIC);
    }

    #[test]
    fn fullwidth_exclamation_does_not_count() {
        assert_eq!(analyze("すごい！").intensity, Intensity::CALM);
    }

    #[test]
    fn serializes_in_wire_order() {
        let json = serde_json::to_string(&analyze("great!")).unwrap();
        assert_eq!(
            json,
            r#"{"sentiment":"neutral","intensity":0.7,"emotions":["calm"]}"#
        );
    }

    #[test]
    fn calm_serializes_as_half() {
        let json = serde_json::to_string(&analyze("fine")).unwrap();
        assert_eq!(
            json,
            r#"{"sentiment":"neutral","intensity":0.5,"emotions":["calm"]}"#
        );
    }

    #[test]
    fn deserializes_service_response() {
        let analysis: Analysis = serde_json::from_str(
            r#"{"sentiment":"neutral","intensity":0.7,"emotions":["calm"]}"#,
        )
        .unwrap();
        assert_eq!(analysis, analyze("!"));
    }

    #[test]
    fn intensity_display() {
        assert_eq!(Intensity::CALM.to_string(), "0.5");
        assert_eq!(Intensity::EMPHATIC.to_string(), "0.7");
    }

    proptest! {
        #[test]
        fn text_without_bang_is_calm(text in "[^!]*") {
            prop_assert_eq!(analyze(&text).intensity, Intensity::CALM);
        }

        #[test]
        fn text_with_bang_is_emphatic(prefix in ".*", suffix in ".*") {
            let text = format!("{prefix}!{suffix}");
            prop_assert_eq!(analyze(&text).intensity, Intensity::EMPHATIC);
        }

        #[test]
        fn label_and_emotions_never_vary(text in ".*") {
            let analysis = analyze(&text);
            prop_assert_eq!(analysis.sentiment, Sentiment::Neutral);
            prop_assert_eq!(analysis.emotions, vec![Emotion::Calm]);
        }
    }
}
