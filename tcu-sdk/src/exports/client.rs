use crate::config::ClientConfig;
use crate::enums::endpoint::Endpoint;
use crate::errors::sdk_error::SdkError;
use crate::exports::api_response::ApiResponse;
use crate::exports::field::{Field, to_mapping};
use crate::models::programme_submission::ProgrammeSubmission;
use crate::models::resubmission::Resubmission;
use crate::models::value::Value;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

/// Blocking client for the bindings. Calls wait for the reply on an owned runtime.
#[derive(uniffi::Object)]
pub struct Client {
    inner: RwLock<crate::client::Client>,
    rt: Runtime,
}

impl Client {
    fn configure(
        &self,
        change: impl FnOnce(&mut ClientConfig) -> Result<(), SdkError>,
    ) -> Result<(), SdkError> {
        self.rt
            .block_on(async { change(self.inner.write().await.config_mut()) })
    }
}

#[uniffi::export]
impl Client {
    /// Creates a client with the production base URLs. Without an institution code, the
    /// username is used.
    #[uniffi::constructor]
    pub fn new(
        username: String,
        session_token: String,
        institution_code: Option<String>,
    ) -> Result<Self, SdkError> {
        let rt = Runtime::new().or(Err(SdkError::CouldNotCreateRuntime))?;

        let mut config = ClientConfig::new(username, session_token);
        if let Some(institution_code) = institution_code {
            config.set_institution_code(institution_code);
        }

        Ok(Self {
            inner: RwLock::new(crate::client::Client::with_config(config)),
            rt,
        })
    }

    pub fn set_username(&self, username: String) -> Result<(), SdkError> {
        self.configure(|config| {
            config.set_username(username);
            Ok(())
        })
    }

    pub fn set_session_token(&self, session_token: String) -> Result<(), SdkError> {
        self.configure(|config| {
            config.set_session_token(session_token);
            Ok(())
        })
    }

    pub fn set_institution_code(&self, institution_code: String) -> Result<(), SdkError> {
        self.configure(|config| {
            config.set_institution_code(institution_code);
            Ok(())
        })
    }

    pub fn set_structured_output(&self, structured_output: bool) -> Result<(), SdkError> {
        self.configure(|config| {
            config.set_structured_output(structured_output);
            Ok(())
        })
    }

    pub fn set_applicant_url(&self, url: String) -> Result<(), SdkError> {
        self.configure(|config| config.set_applicant_url(&url))
    }

    pub fn set_admission_url(&self, url: String) -> Result<(), SdkError> {
        self.configure(|config| config.set_admission_url(&url))
    }

    pub fn set_dashboard_url(&self, url: String) -> Result<(), SdkError> {
        self.configure(|config| config.set_dashboard_url(&url))
    }

    /// Sends a flat parameter block to any operation.
    pub fn send_request(
        &self,
        operation: String,
        fields: Vec<Field>,
        endpoint: Endpoint,
        method: String,
    ) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async {
                self.inner
                    .read()
                    .await
                    .send_request(&operation, to_mapping(fields), endpoint, &method)
                    .await
            })
            .map(ApiResponse::from)
    }

    pub fn check_status(&self, indices: Vec<String>) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async { self.inner.read().await.check_status(indices.as_slice()).await })
            .map(ApiResponse::from)
    }

    pub fn add(
        &self,
        category: String,
        f4indexno: String,
        f6indexno: String,
        other_f4indexno: Vec<String>,
        other_f6indexno: Vec<String>,
    ) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async {
                self.inner
                    .read()
                    .await
                    .add(
                        &category,
                        &f4indexno,
                        &f6indexno,
                        other_f4indexno.as_slice(),
                        other_f6indexno.as_slice(),
                    )
                    .await
            })
            .map(ApiResponse::from)
    }

    /// Uploads one parameter block per record.
    pub fn add_batch(&self, records: Vec<Vec<Field>>) -> Result<ApiResponse, SdkError> {
        let records = Value::Sequence(records.into_iter().map(to_mapping).collect());

        self.rt
            .block_on(async { self.inner.read().await.add_batch(records).await })
            .map(ApiResponse::from)
    }

    pub fn submit_programme(
        &self,
        submission: ProgrammeSubmission,
    ) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async { self.inner.read().await.submit_programme(&submission).await })
            .map(ApiResponse::from)
    }

    pub fn confirm(&self, f4indexno: String, code: String) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async { self.inner.read().await.confirm(&f4indexno, &code).await })
            .map(ApiResponse::from)
    }

    pub fn reject(&self, f4indexno: String, code: String) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async { self.inner.read().await.reject(&f4indexno, &code).await })
            .map(ApiResponse::from)
    }

    pub fn unconfirm(&self, f4indexno: String, code: String) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async { self.inner.read().await.unconfirm(&f4indexno, &code).await })
            .map(ApiResponse::from)
    }

    pub fn resubmit(&self, resubmission: Resubmission) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async { self.inner.read().await.resubmit(&resubmission).await })
            .map(ApiResponse::from)
    }

    pub fn submit_inter_institutional_transfers(
        &self,
        f4indexno: String,
        f6indexno: String,
        current_programme: String,
        previous_programme: String,
    ) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async {
                self.inner
                    .read()
                    .await
                    .submit_inter_institutional_transfers(
                        &f4indexno,
                        &f6indexno,
                        &current_programme,
                        &previous_programme,
                    )
                    .await
            })
            .map(ApiResponse::from)
    }

    pub fn submit_internal_transfers(
        &self,
        f4indexno: String,
        f6indexno: String,
        current_programme: String,
        previous_programme: String,
    ) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async {
                self.inner
                    .read()
                    .await
                    .submit_internal_transfers(
                        &f4indexno,
                        &f6indexno,
                        &current_programme,
                        &previous_programme,
                    )
                    .await
            })
            .map(ApiResponse::from)
    }

    pub fn get_applicant_verification_status(
        &self,
        programme: String,
    ) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async {
                self.inner
                    .read()
                    .await
                    .get_applicant_verification_status(&programme)
                    .await
            })
            .map(ApiResponse::from)
    }

    pub fn request_confirmation_code(
        &self,
        f4indexno: String,
        mobile_number: String,
    ) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async {
                self.inner
                    .read()
                    .await
                    .request_confirmation_code(&f4indexno, &mobile_number)
                    .await
            })
            .map(ApiResponse::from)
    }

    pub fn get_status(&self, programme: String) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async { self.inner.read().await.get_status(&programme).await })
            .map(ApiResponse::from)
    }

    pub fn get_confirmed(&self, programme: String) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async { self.inner.read().await.get_confirmed(&programme).await })
            .map(ApiResponse::from)
    }

    pub fn get_admitted(&self, programme: String) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async { self.inner.read().await.get_admitted(&programme).await })
            .map(ApiResponse::from)
    }

    pub fn get_programmes(&self) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async { self.inner.read().await.get_programmes().await })
            .map(ApiResponse::from)
    }

    pub fn populate(
        &self,
        programme: String,
        males: u32,
        females: u32,
    ) -> Result<ApiResponse, SdkError> {
        self.rt
            .block_on(async {
                self.inner
                    .read()
                    .await
                    .populate(&programme, males, females)
                    .await
            })
            .map(ApiResponse::from)
    }
}
