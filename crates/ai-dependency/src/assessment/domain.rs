use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Frequency answer accepted for every assessment question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResponseLevel {
    Never,
    Rarely,
    Sometimes,
    Often,
    Always,
}

impl ResponseLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Never,
            Self::Rarely,
            Self::Sometimes,
            Self::Often,
            Self::Always,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Rarely => "Rarely",
            Self::Sometimes => "Sometimes",
            Self::Often => "Often",
            Self::Always => "Always",
        }
    }

    /// Position on the 0..=100 dependency scale.
    pub const fn percent(self) -> u8 {
        match self {
            Self::Never => 0,
            Self::Rarely => 25,
            Self::Sometimes => 50,
            Self::Often => 75,
            Self::Always => 100,
        }
    }

    /// Position on the 0..=4 frequency scale used by weighted questionnaires.
    pub const fn frequency(self) -> u8 {
        match self {
            Self::Never => 0,
            Self::Rarely => 1,
            Self::Sometimes => 2,
            Self::Often => 3,
            Self::Always => 4,
        }
    }

    /// Matches a label ignoring case and surrounding whitespace.
    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for ResponseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResponseLevel {
    type Err = InvalidResponseReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| InvalidResponseReason::UnrecognizedLabel(s.to_string()))
    }
}

/// Identifier of a question, such as `daily_usage`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Answers collected during one assessment, kept in the order questions were first answered.
///
/// Answering a question again replaces the level but keeps the question's original position,
/// which matters for order-sensitive tie breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSet {
    entries: Vec<(QuestionId, ResponseLevel)>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an answer and returns the level it replaced, if any.
    pub fn record(
        &mut self,
        question: impl Into<QuestionId>,
        level: ResponseLevel,
    ) -> Option<ResponseLevel> {
        let question = question.into();
        match self.entries.iter_mut().find(|(id, _)| *id == question) {
            Some((_, existing)) => Some(std::mem::replace(existing, level)),
            None => {
                self.entries.push((question, level));
                None
            }
        }
    }

    /// Parses a raw answer label before storing it.
    pub fn record_label(
        &mut self,
        question: impl Into<QuestionId>,
        label: &str,
    ) -> Result<Option<ResponseLevel>, AssessmentError> {
        let question = question.into();
        match ResponseLevel::from_label(label) {
            Some(level) => Ok(self.record(question, level)),
            None => Err(AssessmentError::InvalidResponse {
                question,
                reason: InvalidResponseReason::UnrecognizedLabel(label.to_string()),
            }),
        }
    }

    /// Builds a set from raw `(question, label)` pairs, failing on the first bad label.
    pub fn from_labels<I, K, V>(pairs: I) -> Result<Self, AssessmentError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<QuestionId>,
        V: AsRef<str>,
    {
        let mut responses = Self::new();
        for (question, label) in pairs {
            responses.record_label(question, label.as_ref())?;
        }
        Ok(responses)
    }

    pub fn get(&self, question: &str) -> Option<ResponseLevel> {
        self.entries
            .iter()
            .find(|(id, _)| id.as_str() == question)
            .map(|(_, level)| *level)
    }

    pub fn contains(&self, question: &str) -> bool {
        self.get(question).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, ResponseLevel)> + '_ {
        self.entries.iter().map(|(id, level)| (id, *level))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Into<QuestionId>> FromIterator<(K, ResponseLevel)> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = (K, ResponseLevel)>>(iter: T) -> Self {
        let mut responses = Self::new();
        for (question, level) in iter {
            responses.record(question, level);
        }
        responses
    }
}

impl Serialize for ResponseSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (question, level) in &self.entries {
            map.serialize_entry(question.as_str(), level.label())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ResponseSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawResponses::deserialize(deserializer)?;
        raw.into_response_set().map_err(serde::de::Error::custom)
    }
}

/// Unvalidated answers exactly as a client sent them, in document order.
///
/// Request bodies carry this instead of [`ResponseSet`] so a bad label surfaces as an
/// [`AssessmentError`] rather than a generic JSON rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponses(pub Vec<(String, String)>);

impl RawResponses {
    pub fn into_response_set(self) -> Result<ResponseSet, AssessmentError> {
        ResponseSet::from_labels(self.0)
    }
}

impl<'de> Deserialize<'de> for RawResponses {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = RawResponses;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of question ids to answer labels")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs: Vec<(String, String)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((question, label)) = access.next_entry::<String, String>()? {
                    match pairs.iter_mut().find(|(id, _)| *id == question) {
                        Some((_, existing)) => *existing = label,
                        None => pairs.push((question, label)),
                    }
                }
                Ok(RawResponses(pairs))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// Role the respondent identifies with, paired with the persona shown on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Profession {
    Developer,
    Writer,
    Student,
    Designer,
    Doctor,
    Lawyer,
    Marketer,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    Entrepreneur,
    #[serde(rename = "General User")]
    GeneralUser,
}

impl Profession {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::Developer,
            Self::Writer,
            Self::Student,
            Self::Designer,
            Self::Doctor,
            Self::Lawyer,
            Self::Marketer,
            Self::ProjectManager,
            Self::CustomerSupport,
            Self::Entrepreneur,
            Self::GeneralUser,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Writer => "Writer",
            Self::Student => "Student",
            Self::Designer => "Designer",
            Self::Doctor => "Doctor",
            Self::Lawyer => "Lawyer",
            Self::Marketer => "Marketer",
            Self::ProjectManager => "Project Manager",
            Self::CustomerSupport => "Customer Support",
            Self::Entrepreneur => "Entrepreneur",
            Self::GeneralUser => "General User",
        }
    }

    pub const fn persona(self) -> &'static str {
        match self {
            Self::Developer => "Code Craftsman",
            Self::Writer => "Word Weaver",
            Self::Student => "Knowledge Seeker",
            Self::Designer => "Visual Artist",
            Self::Doctor => "Health Guardian",
            Self::Lawyer => "Justice Keeper",
            Self::Marketer => "Story Teller",
            Self::ProjectManager => "Harmony Creator",
            Self::CustomerSupport => "Connection Builder",
            Self::Entrepreneur => "Vision Pioneer",
            Self::GeneralUser => "Digital Explorer",
        }
    }

    /// Long-form label used by the weighted questionnaire catalog, where it differs.
    const fn long_label(self) -> Option<&'static str> {
        match self {
            Self::Doctor => Some("Doctor / Medical Professional"),
            Self::Lawyer => Some("Lawyer / Legal Professional"),
            Self::Entrepreneur => Some("Entrepreneur / Business Owner"),
            _ => None,
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered().into_iter().find(|profession| {
            profession.label().eq_ignore_ascii_case(raw)
                || profession
                    .long_label()
                    .is_some_and(|long| long.eq_ignore_ascii_case(raw))
        })
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Profession {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| AssessmentError::UnknownProfession(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidResponseReason {
    #[error("'{0}' is not one of Never, Rarely, Sometimes, Often, Always")]
    UnrecognizedLabel(String),
    #[error("no answer recorded")]
    Missing,
    #[error("question is not part of this questionnaire")]
    UnknownQuestion,
}

/// Failures surfaced by the scoring engine and its catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid response for '{question}': {reason}")]
    InvalidResponse {
        question: QuestionId,
        reason: InvalidResponseReason,
    },
    #[error("no responses supplied")]
    EmptyInput,
    #[error("unknown profession '{0}'")]
    UnknownProfession(String),
}

impl AssessmentError {
    pub(crate) fn missing(question: &str) -> Self {
        Self::InvalidResponse {
            question: QuestionId::from(question),
            reason: InvalidResponseReason::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_fixed_percentages() {
        let percents: Vec<u8> = ResponseLevel::ordered()
            .into_iter()
            .map(ResponseLevel::percent)
            .collect();
        assert_eq!(percents, vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(" often ".parse::<ResponseLevel>(), Ok(ResponseLevel::Often));
        assert_eq!(
            "Frequently".parse::<ResponseLevel>(),
            Err(InvalidResponseReason::UnrecognizedLabel(
                "Frequently".to_string()
            ))
        );
    }

    #[test]
    fn overwriting_keeps_first_position() {
        let mut responses = ResponseSet::new();
        responses.record("daily_usage", ResponseLevel::Never);
        responses.record("decision_making", ResponseLevel::Often);
        let previous = responses.record("daily_usage", ResponseLevel::Always);

        assert_eq!(previous, Some(ResponseLevel::Never));
        assert_eq!(responses.len(), 2);
        let order: Vec<&str> = responses.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["daily_usage", "decision_making"]);
        assert_eq!(responses.get("daily_usage"), Some(ResponseLevel::Always));
    }

    #[test]
    fn from_labels_reports_the_offending_question() {
        let err =
            ResponseSet::from_labels([("daily_usage", "Often"), ("content_creation", "Maybe")])
                .expect_err("unknown label rejected");
        assert_eq!(
            err,
            AssessmentError::InvalidResponse {
                question: QuestionId::from("content_creation"),
                reason: InvalidResponseReason::UnrecognizedLabel("Maybe".to_string()),
            }
        );
    }

    #[test]
    fn json_round_trip_preserves_document_order() {
        let raw = r#"{"content_creation":"Rarely","daily_usage":"always"}"#;
        let responses: ResponseSet = serde_json::from_str(raw).expect("valid responses");
        let order: Vec<&str> = responses.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["content_creation", "daily_usage"]);

        let encoded = serde_json::to_string(&responses).expect("serializes");
        assert_eq!(encoded, r#"{"content_creation":"Rarely","daily_usage":"Always"}"#);
    }

    #[test]
    fn json_with_unknown_label_is_rejected() {
        let result: Result<ResponseSet, _> = serde_json::from_str(r#"{"daily_usage":"Never!"}"#);
        let err = result.expect_err("label rejected");
        assert!(err.to_string().contains("daily_usage"));
    }

    #[test]
    fn professions_accept_long_form_labels() {
        assert_eq!(
            Profession::from_label("doctor / medical professional"),
            Some(Profession::Doctor)
        );
        assert_eq!(Profession::from_label("project manager"), Some(Profession::ProjectManager));
        assert_eq!(
            "Astronaut".parse::<Profession>(),
            Err(AssessmentError::UnknownProfession("Astronaut".to_string()))
        );
        assert_eq!(Profession::GeneralUser.persona(), "Digital Explorer");
    }
}
