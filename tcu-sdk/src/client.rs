use crate::config::ClientConfig;
use crate::enums::endpoint::Endpoint;
use crate::envelope::{Envelope, PARAMETERS_NODE};
use crate::errors::sdk_error::SdkError;
use crate::http::http_client::HttpClient;
use crate::models::programme_submission::ProgrammeSubmission;
use crate::models::response::Response;
use crate::models::resubmission::Resubmission;
use crate::models::value::{Mapping, Value};
use log::debug;

/// Defines the client itself, every TCU operation is done through an instance of this struct.
///
/// Operations only borrow the client, so changing credentials or URLs requires exclusive
/// access and can never race an in-flight request.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http: HttpClient,
}

impl Client {
    /// Creates a client with the production base URLs.
    pub fn new(username: impl Into<String>, session_token: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(username, session_token))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            http: HttpClient::new(),
        }
    }

    /// Uses a custom [HttpClient], e.g. one wrapping a `reqwest` client with a timeout.
    pub fn with_http_client(config: ClientConfig, http: HttpClient) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ClientConfig {
        &mut self.config
    }

    /// Returns the request document `params` would be sent as, without sending it.
    pub fn request_body(&self, params: Value, node_name: &str) -> Result<String, SdkError> {
        Envelope::build(params, node_name, &self.config).to_xml()
    }

    /// Sends `params` to `operation` on the given endpoint family.
    pub async fn send_request(
        &self,
        operation: &str,
        params: Value,
        endpoint: Endpoint,
        method: &str,
    ) -> Result<Response, SdkError> {
        let envelope = Envelope::build(params, PARAMETERS_NODE, &self.config);
        let base_url = self.config.base_url(endpoint);

        debug!("{operation} -> {endpoint:?} ({base_url})");

        self.http
            .send(
                operation,
                &envelope,
                base_url,
                method,
                self.config.structured_output(),
            )
            .await
    }

    async fn post(
        &self,
        operation: &str,
        params: impl Into<Value>,
        endpoint: Endpoint,
    ) -> Result<Response, SdkError> {
        self.send_request(operation, params.into(), endpoint, "POST")
            .await
    }

    /// Checks whether applicants are eligible to apply. Several index numbers are checked
    /// in a single request block.
    pub async fn check_status<S: AsRef<str>>(&self, indices: &[S]) -> Result<Response, SdkError> {
        let params = match indices {
            [index] => Value::from(Mapping::new().with("f4indexno", index.as_ref())),
            _ => Value::Sequence(vec![Value::Sequence(
                indices
                    .iter()
                    .map(|index| Value::from(Mapping::new().with("f4indexno", index.as_ref())))
                    .collect(),
            )]),
        };

        self.post("checkStatus", params, Endpoint::Applicant).await
    }

    /// Uploads an applicant's form four and form six index numbers. Extra index numbers
    /// are sent comma-separated.
    pub async fn add<S: AsRef<str>>(
        &self,
        category: &str,
        f4indexno: &str,
        f6indexno: &str,
        other_f4indexno: &[S],
        other_f6indexno: &[S],
    ) -> Result<Response, SdkError> {
        let params = Mapping::new()
            .with("Category", category)
            .with("f4indexno", f4indexno)
            .with("f6indexno", f6indexno)
            .with("Otherf4indexno", join(other_f4indexno))
            .with("Otherf6indexno", join(other_f6indexno));

        self.post("add", params, Endpoint::Applicant).await
    }

    /// Uploads several applicants at once, one `RequestParameters` block per record.
    /// `records` must be a sequence.
    pub async fn add_batch(&self, records: Value) -> Result<Response, SdkError> {
        if !matches!(records, Value::Sequence(_)) {
            return Err(SdkError::BatchInputType);
        }

        self.post("add", records, Endpoint::Applicant).await
    }

    /// Pushes an applicant with their selected programmes, admitted programme and contact details.
    pub async fn submit_programme(
        &self,
        submission: &ProgrammeSubmission,
    ) -> Result<Response, SdkError> {
        self.post(
            "submitProgramme",
            submission.to_parameters(),
            Endpoint::Applicant,
        )
        .await
    }

    /// Pushes the special confirmation code of an applicant with multiple admissions.
    pub async fn confirm(&self, f4indexno: &str, code: &str) -> Result<Response, SdkError> {
        self.post("confirm", confirmation(f4indexno, code), Endpoint::Applicant)
            .await
    }

    /// Pushes an applicant who rejected their admission.
    pub async fn reject(&self, f4indexno: &str, code: &str) -> Result<Response, SdkError> {
        self.post("reject", confirmation(f4indexno, code), Endpoint::Applicant)
            .await
    }

    /// Withdraws a previous confirmation. The institution code travels with the parameters.
    pub async fn unconfirm(&self, f4indexno: &str, code: &str) -> Result<Response, SdkError> {
        let params = Mapping::new()
            .with("institutionCode", self.config.institution_code())
            .with("f4indexno", f4indexno)
            .with("ConfirmationCode", code);

        self.post("unconfirm", params, Endpoint::Applicant).await
    }

    /// Pushes an applicant whose details changed since the last submission.
    pub async fn resubmit(&self, resubmission: &Resubmission) -> Result<Response, SdkError> {
        self.post(
            "resubmit",
            resubmission.to_parameters(),
            Endpoint::Applicant,
        )
        .await
    }

    pub async fn submit_inter_institutional_transfers(
        &self,
        f4indexno: &str,
        f6indexno: &str,
        current_programme: &str,
        previous_programme: &str,
    ) -> Result<Response, SdkError> {
        self.post(
            "submitInterInstitutionalTransfers",
            transfer(f4indexno, f6indexno, current_programme, previous_programme),
            Endpoint::Admission,
        )
        .await
    }

    pub async fn submit_internal_transfers(
        &self,
        f4indexno: &str,
        f6indexno: &str,
        current_programme: &str,
        previous_programme: &str,
    ) -> Result<Response, SdkError> {
        self.post(
            "submitInternalTransfers",
            transfer(f4indexno, f6indexno, current_programme, previous_programme),
            Endpoint::Admission,
        )
        .await
    }

    pub async fn get_applicant_verification_status(
        &self,
        programme: &str,
    ) -> Result<Response, SdkError> {
        self.post(
            "getApplicantVerificationStatus",
            Mapping::new().with("ProgrammeCode", programme),
            Endpoint::Applicant,
        )
        .await
    }

    /// Asks the API to send a confirmation code to the applicant's phone.
    pub async fn request_confirmation_code(
        &self,
        f4indexno: &str,
        mobile_number: &str,
    ) -> Result<Response, SdkError> {
        let params = Mapping::new()
            .with("f4Index", f4indexno)
            .with("MobileNumber", mobile_number);

        self.post("requestConfirmationCode", params, Endpoint::Admission)
            .await
    }

    /// Lists all applicants in a programme.
    pub async fn get_status(&self, programme: &str) -> Result<Response, SdkError> {
        self.post("getStatus", programme_filter(programme), Endpoint::Applicant)
            .await
    }

    /// Lists confirmed applicants among those with multiple admissions.
    pub async fn get_confirmed(&self, programme: &str) -> Result<Response, SdkError> {
        self.post(
            "getConfirmed",
            programme_filter(programme),
            Endpoint::Applicant,
        )
        .await
    }

    /// Downloads the admission status of all applicants in a programme.
    pub async fn get_admitted(&self, programme: &str) -> Result<Response, SdkError> {
        self.post("getAdmitted", programme_filter(programme), Endpoint::Admission)
            .await
    }

    /// Lists programmes with admitted candidates for this institution.
    pub async fn get_programmes(&self) -> Result<Response, SdkError> {
        let params = Mapping::new().with("institutionCode", self.config.institution_code());

        self.post("getProgrammes", params, Endpoint::Applicant).await
    }

    /// Uploads application statistics for a programme.
    pub async fn populate(
        &self,
        programme: &str,
        males: u32,
        females: u32,
    ) -> Result<Response, SdkError> {
        let params = Mapping::new()
            .with("Programme", programme)
            .with("Males", males)
            .with("Females", females);

        self.post("populate", params, Endpoint::Dashboard).await
    }
}

fn join<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(",")
}

fn confirmation(f4indexno: &str, code: &str) -> Mapping {
    Mapping::new()
        .with("f4indexno", f4indexno)
        .with("ConfirmationCode", code)
}

fn transfer(
    f4indexno: &str,
    f6indexno: &str,
    current_programme: &str,
    previous_programme: &str,
) -> Mapping {
    Mapping::new()
        .with("f4indexno", f4indexno)
        .with("f6indexno", f6indexno)
        .with("CurrentProgrammeCode", current_programme)
        .with("PreviousProgrammeCode", previous_programme)
}

fn programme_filter(programme: &str) -> Mapping {
    Mapping::new().with("Programme", programme)
}
