//! Movie and character records as returned by a SWAPI-style API.
//!
//! Records are validated from a `serde_json::Value` rather than deserialized
//! directly, so a missing `characters` list and a non-string list entry can be
//! told apart and handled at different stages.

use serde_json::Value;

use crate::error::ShapeError;

/// One entry of a movie's `characters` list.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterRef {
    /// Absolute URL of a character resource.
    Url(String),
    /// Entry that is not a string; kept so list positions stay intact.
    Invalid(Value),
}

impl From<Value> for CharacterRef {
    fn from(value: Value) -> Self {
        match value {
            Value::String(url) => CharacterRef::Url(url),
            other => CharacterRef::Invalid(other),
        }
    }
}

/// The parts of a film record this tool reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Film title, if the API sent one. Only used for logging.
    pub title: Option<String>,
    /// Character references in order of appearance.
    pub characters: Vec<CharacterRef>,
}

impl Movie {
    /// Validate a decoded film record.
    ///
    /// Fails if the value is not an object, or `characters` is absent, null,
    /// or anything other than an array.
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        let Value::Object(mut map) = value else {
            return Err(ShapeError::NotAnObject);
        };
        let characters = match map.remove("characters") {
            None | Some(Value::Null) => return Err(ShapeError::MissingField("characters")),
            Some(Value::Array(items)) => items.into_iter().map(CharacterRef::from).collect(),
            Some(_) => {
                return Err(ShapeError::WrongType {
                    field: "characters",
                    expected: "an array",
                })
            }
        };
        let title = match map.remove("title") {
            Some(Value::String(t)) => Some(t),
            _ => None,
        };
        Ok(Movie { title, characters })
    }
}

/// The parts of a people record this tool reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
}

impl Character {
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        let Value::Object(mut map) = value else {
            return Err(ShapeError::NotAnObject);
        };
        match map.remove("name") {
            Some(Value::String(name)) => Ok(Character { name }),
            None | Some(Value::Null) => Err(ShapeError::MissingField("name")),
            Some(_) => Err(ShapeError::WrongType {
                field: "name",
                expected: "a string",
            }),
        }
    }
}
