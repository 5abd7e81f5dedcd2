//! Encoding of request parameters into the payload an actor reads on stdin.
//!
//! Actors consume a flat JSON object in which every field is wrapped in an
//! [`ActorInputValue`] marker, so the actor-side protocol can tell a direct
//! literal apart from other sourcing modes added later.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Marker wrapper around one actor input field.
///
/// Currently only direct literals exist; the enum shape leaves room for
/// indirect variants (e.g. a file-sourced value) without changing the wire
/// layout of existing fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActorInputValue {
    Literal { value: Value },
}

impl ActorInputValue {
    pub fn literal(value: Value) -> Self {
        ActorInputValue::Literal { value }
    }

    /// The unwrapped field value.
    pub fn into_value(self) -> Value {
        match self {
            ActorInputValue::Literal { value } => value,
        }
    }
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("could not serialize actor input: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("actor input parameters must form a JSON object")]
    NotAnObject,
}

/// Builds the JSON document sent to an actor from a typed parameter struct.
///
/// The struct is flattened to its JSON object form and every field is
/// wrapped in an [`ActorInputValue`] before the whole mapping is serialized.
pub fn encode_actor_input<P: Serialize>(params: &P) -> Result<String, EncodeError> {
    let fields = match serde_json::to_value(params)? {
        Value::Object(map) => map,
        _ => return Err(EncodeError::NotAnObject),
    };

    let mut wrapped = serde_json::Map::with_capacity(fields.len());
    for (name, value) in fields {
        wrapped.insert(name, serde_json::to_value(ActorInputValue::literal(value))?);
    }

    Ok(serde_json::to_string(&Value::Object(wrapped))?)
}
