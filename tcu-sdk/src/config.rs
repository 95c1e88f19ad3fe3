use crate::enums::endpoint::Endpoint;
use crate::errors::sdk_error::SdkError;
use reqwest::Url;

pub const APPLICANT_URL: &str = "http://api.tcu.go.tz/applicants/";
pub const ADMISSION_URL: &str = "http://197.149.178.22/admission/";
pub const DASHBOARD_URL: &str = "http://197.149.178.22/dashboard/";

/// Credentials and endpoint base URLs used to build and route requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    username: String,
    session_token: String,
    institution_code: Option<String>,
    applicant_url: String,
    admission_url: String,
    dashboard_url: String,
    structured_output: bool,
}

impl ClientConfig {
    /// Uses the production base URLs and parses `200` replies into element trees.
    pub fn new(username: impl Into<String>, session_token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            session_token: session_token.into(),
            institution_code: None,
            applicant_url: APPLICANT_URL.to_string(),
            admission_url: ADMISSION_URL.to_string(),
            dashboard_url: DASHBOARD_URL.to_string(),
            structured_output: true,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn session_token(&self) -> &str {
        &self.session_token
    }

    /// Falls back to the username when no institution code was set.
    pub fn institution_code(&self) -> &str {
        self.institution_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .unwrap_or(&self.username)
    }

    pub fn structured_output(&self) -> bool {
        self.structured_output
    }

    pub fn base_url(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Applicant => &self.applicant_url,
            Endpoint::Admission => &self.admission_url,
            Endpoint::Dashboard => &self.dashboard_url,
        }
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_session_token(&mut self, session_token: impl Into<String>) {
        self.session_token = session_token.into();
    }

    pub fn set_institution_code(&mut self, institution_code: impl Into<String>) {
        self.institution_code = Some(institution_code.into());
    }

    /// Whether successful replies are parsed. When off, every body is returned raw.
    pub fn set_structured_output(&mut self, structured_output: bool) {
        self.structured_output = structured_output;
    }

    /// Replaces the base URL of `endpoint`. An invalid URL leaves the previous one in place.
    pub fn set_base_url(&mut self, endpoint: Endpoint, url: &str) -> Result<(), SdkError> {
        validate_url(url)?;

        let slot = match endpoint {
            Endpoint::Applicant => &mut self.applicant_url,
            Endpoint::Admission => &mut self.admission_url,
            Endpoint::Dashboard => &mut self.dashboard_url,
        };
        *slot = url.to_string();

        Ok(())
    }

    pub fn set_applicant_url(&mut self, url: &str) -> Result<(), SdkError> {
        self.set_base_url(Endpoint::Applicant, url)
    }

    pub fn set_admission_url(&mut self, url: &str) -> Result<(), SdkError> {
        self.set_base_url(Endpoint::Admission, url)
    }

    pub fn set_dashboard_url(&mut self, url: &str) -> Result<(), SdkError> {
        self.set_base_url(Endpoint::Dashboard, url)
    }
}

/// Accepts absolute URLs with a host, such as `http://api.tcu.go.tz/applicants/`.
pub fn validate_url(url: &str) -> Result<Url, SdkError> {
    let parsed =
        Url::parse(url).map_err(|error| SdkError::InvalidConfiguration(format!("{url}: {error}")))?;

    if parsed.cannot_be_a_base() || !parsed.has_host() {
        return Err(SdkError::InvalidConfiguration(url.to_string()));
    }

    Ok(parsed)
}
