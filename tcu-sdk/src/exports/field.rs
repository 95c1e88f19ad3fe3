use crate::models::value::{Mapping, Value};

/// A named text field, used to pass flat parameter blocks through the bindings.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct Field {
    pub name: String,
    pub value: String,
}

pub(crate) fn to_mapping(fields: Vec<Field>) -> Value {
    fields
        .into_iter()
        .map(|field| (field.name, field.value))
        .collect::<Mapping>()
        .into()
}
