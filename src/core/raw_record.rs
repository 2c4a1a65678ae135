use serde::{Deserialize, Serialize};

/// Deserialize a point value from int, float, string or null
/// (JS backend compatibility)
///
/// Unlike a strict parser, anything unparseable coerces to `None` instead
/// of failing: the ranking contract is that malformed upstream data is
/// defaulted, never rejected.
fn deserialize_points<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.round() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        // null, bools, arrays, objects: nothing usable
        _ => None,
    })
}

/// A raw participant record, exactly as the backing service reports it.
///
/// Every field is optional and of unreliable type/presence; the normalizer
/// (`ranking::normalize`) turns this into a canonical `ScoreRecord`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Opaque participant identifier
    #[serde(default)]
    pub id: Option<String>,

    /// Display name, may be missing or empty
    #[serde(default)]
    pub name: Option<String>,

    /// Points scored so far
    #[serde(default)]
    #[serde(deserialize_with = "deserialize_points")]
    pub score: Option<i64>,

    /// Maximum attainable points for the event
    #[serde(default)]
    #[serde(deserialize_with = "deserialize_points")]
    pub total_possible_score: Option<i64>,
}

impl RawRecord {
    /// Create a raw record with an id and name (the identifying fields)
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            score: None,
            total_possible_score: None,
        }
    }

    /// Builder-style score setter
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = Some(score);
        self
    }

    /// Builder-style maximum setter
    pub fn with_total(mut self, total: i64) -> Self {
        self.total_possible_score = Some(total);
        self
    }

    /// True when both identifying fields are absent or empty, i.e. the
    /// record is an incomplete placeholder that must not be ranked.
    pub fn is_placeholder(&self) -> bool {
        let empty = |v: &Option<String>| v.as_deref().map_or(true, |s| s.is_empty());
        empty(&self.id) && empty(&self.name)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
