use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single task card.
///
/// Equality is field-wise: two cards are equal exactly when all four
/// fields are equal.
#[derive(Debug, Eq, PartialEq, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Card {
    summary: String,
    owner: String,
    state: String,
    id: u32,
}

/// Error type for mapping conversions on [`Card`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    /// One of the four required keys is absent from the mapping.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    /// The mapping contains a key that is not a Card field.
    #[error("unknown field '{0}'")]
    UnknownField(String),
    /// A key is present but its value has the wrong type.
    #[error("field '{field}' is not {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

const FIELDS: [&str; 4] = ["summary", "owner", "state", "id"];

impl Card {
    pub fn new(summary: String, owner: String, state: String, id: u32) -> Self {
        Self {
            summary,
            owner,
            state,
            id,
        }
    }

    /// Returns the summary text.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the workflow state label.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the card id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Converts the card into a string-keyed mapping with exactly the
    /// keys `summary`, `owner`, `state` and `id`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("summary".to_string(), Value::from(self.summary.clone()));
        map.insert("owner".to_string(), Value::from(self.owner.clone()));
        map.insert("state".to_string(), Value::from(self.state.clone()));
        map.insert("id".to_string(), Value::from(self.id));
        map
    }

    /// Builds a card from a string-keyed mapping.
    ///
    /// The mapping must contain exactly the keys `summary`, `owner`,
    /// `state` and `id`. Missing keys, unknown keys and wrong-typed
    /// values are all rejected; no partial card is produced.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, CardError> {
        if let Some(key) = map.keys().find(|k| !FIELDS.contains(&k.as_str())) {
            return Err(CardError::UnknownField(key.clone()));
        }

        Ok(Self {
            summary: text_field(map, "summary")?,
            owner: text_field(map, "owner")?,
            state: text_field(map, "state")?,
            id: id_field(map)?,
        })
    }
}

fn text_field(map: &Map<String, Value>, field: &'static str) -> Result<String, CardError> {
    map.get(field)
        .ok_or(CardError::MissingField(field))?
        .as_str()
        .map(str::to_string)
        .ok_or(CardError::InvalidField {
            field,
            expected: "a string",
        })
}

fn id_field(map: &Map<String, Value>) -> Result<u32, CardError> {
    map.get("id")
        .ok_or(CardError::MissingField("id"))?
        .as_u64()
        .and_then(|id| u32::try_from(id).ok())
        .ok_or(CardError::InvalidField {
            field: "id",
            expected: "an integer",
        })
}
