//! Message envelope and the four message kinds routed by the bus.

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::name::MessageName;

/// A named message with a JSON payload.
///
/// Fields are private: once constructed a message is never mutated, it is
/// only cloned and handed to handlers and listeners.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    name: MessageName,
    payload: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<Vec<(String, String)>>,
}

impl Message {
    /// Create a message with the given name and payload.
    pub fn new(name: impl Into<MessageName>, payload: Value) -> Self {
        Self {
            name: name.into(),
            payload,
            metadata: None,
        }
    }

    /// Create a message that carries no payload.
    pub fn named(name: impl Into<MessageName>) -> Self {
        Self::new(name, Value::Null)
    }

    /// Create a message with a serde-serialized payload.
    pub fn encode<T: Serialize>(
        name: impl Into<MessageName>,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(name, serde_json::to_value(payload)?))
    }

    /// Decode the payload into a typed struct.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.payload)
    }

    /// Add metadata to the message.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    pub fn name(&self) -> &MessageName {
        &self.name
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Look up a metadata value by key.
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata
            .as_ref()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A payload type with a fixed message name.
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct CreateOrder { id: String }
///
/// impl MessageType for CreateOrder {
///     const NAME: &'static str = "CreateOrder";
/// }
///
/// let command = Command::typed(&CreateOrder { id: "o1".into() })?;
/// ```
pub trait MessageType: Serialize {
    const NAME: &'static str;
}

macro_rules! message_kind {
    ($(#[$doc:meta])* $kind:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $kind(Message);

        impl $kind {
            pub fn new(name: impl Into<MessageName>, payload: Value) -> Self {
                Self(Message::new(name, payload))
            }

            pub fn named(name: impl Into<MessageName>) -> Self {
                Self(Message::named(name))
            }

            pub fn encode<T: Serialize>(
                name: impl Into<MessageName>,
                payload: &T,
            ) -> Result<Self, serde_json::Error> {
                Message::encode(name, payload).map(Self)
            }

            /// Build the message from a payload type carrying its own name.
            pub fn typed<T: MessageType>(payload: &T) -> Result<Self, serde_json::Error> {
                Self::encode(T::NAME, payload)
            }

            pub fn with_metadata(self, key: impl Into<String>, value: impl Into<String>) -> Self {
                Self(self.0.with_metadata(key, value))
            }

            pub fn into_message(self) -> Message {
                self.0
            }
        }

        impl Deref for $kind {
            type Target = Message;

            fn deref(&self) -> &Message {
                &self.0
            }
        }

        impl From<Message> for $kind {
            fn from(message: Message) -> Self {
                Self(message)
            }
        }
    };
}

message_kind!(
    /// An intent to change state. Routed to exactly one command handler.
    Command
);
message_kind!(
    /// A read request. Routed to exactly one query handler.
    Query
);
message_kind!(
    /// A fact that occurred. Fanned out to every listener of its name.
    Event
);
message_kind!(
    /// Returned by a query handler, or by a command handler alongside its events.
    Response
);
