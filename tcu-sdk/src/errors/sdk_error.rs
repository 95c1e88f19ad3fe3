/// General errors the SDK might return.
#[derive(Debug, uniffi::Error, thiserror::Error)]
#[uniffi(flat_error)]
pub enum SdkError {
    #[error("Invalid URL provided: {0}")]
    InvalidConfiguration(String),
    #[error("Missing Request Parameters")]
    MissingParameters,
    #[error("Invalid/Unknown \"{0}\" HTTP method defined")]
    UnsupportedMethod(String),
    #[error("Batch parameters must be a sequence")]
    BatchInputType,
    #[error("Error communicating with the server: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Could not parse the response body: {0}")]
    ResponseParse(String),
    #[error("Scalar value inside a sequence has no element name")]
    UnnamedValue,
    #[error("\"{0}\" is not a valid XML element name")]
    InvalidElementName(String),
    #[error("Could not write the request body: {0}")]
    Serialization(String),
    #[error("Could not create runtime")]
    CouldNotCreateRuntime,
}
