use crate::config::ClientConfig;
use crate::errors::sdk_error::SdkError;
use crate::http::xml::serializer::to_xml;
use crate::models::value::{Mapping, Value};

/// Root element of every request document.
pub const REQUEST_ROOT: &str = "Request";

/// Default name of a parameter block.
pub const PARAMETERS_NODE: &str = "RequestParameters";

/// A request ready to be serialized: one credential block followed by one or more
/// parameter blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    username: String,
    session_token: String,
    node_name: String,
    blocks: Vec<Value>,
}

impl Envelope {
    /// Wraps `params` with the credentials from `config`.
    ///
    /// Flat parameters become a single block. When any direct entry of `params` is itself
    /// a mapping or sequence, every entry gets its own block instead, which is how batch
    /// submissions produce repeated `<RequestParameters>` siblings.
    pub fn build(params: Value, node_name: &str, config: &ClientConfig) -> Self {
        let blocks = match params {
            Value::Mapping(mapping) if is_multidimensional(mapping.values()) => {
                mapping.into_iter().map(|(_, value)| value).collect()
            }
            Value::Sequence(items) if is_multidimensional(items.iter()) => items,
            params => vec![params],
        };

        Self {
            username: config.username().to_string(),
            session_token: config.session_token().to_string(),
            node_name: node_name.to_string(),
            blocks,
        }
    }

    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    pub fn blocks(&self) -> &[Value] {
        &self.blocks
    }

    /// Whether at least one parameter block carries data.
    pub fn has_parameters(&self) -> bool {
        self.blocks.iter().any(|block| !block.is_empty())
    }

    /// The whole envelope as a value tree: a sequence of single-entry mappings, so the
    /// repeated blocks serialize as siblings under the root.
    pub fn to_value(&self) -> Value {
        let username_token = Mapping::new()
            .with("Username", self.username.as_str())
            .with("SessionToken", self.session_token.as_str());

        let mut entries = Vec::with_capacity(self.blocks.len() + 1);
        entries.push(Value::from(
            Mapping::new().with("UsernameToken", username_token),
        ));
        entries.extend(
            self.blocks
                .iter()
                .map(|block| Value::from(Mapping::new().with(self.node_name.as_str(), block.clone()))),
        );

        Value::Sequence(entries)
    }

    pub fn to_xml(&self) -> Result<String, SdkError> {
        to_xml(&self.to_value(), REQUEST_ROOT)
    }
}

/// True when at least one of a container's entries is itself a container.
pub fn is_multidimensional<'a>(mut entries: impl Iterator<Item = &'a Value>) -> bool {
    entries.any(Value::is_container)
}
