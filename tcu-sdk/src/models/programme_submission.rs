use crate::models::value::{Mapping, Value};

pub const DEFAULT_NATIONALITY: &str = "Tanzanian";
pub const DEFAULT_IMPAIRMENT: &str = "None";

/// An applicant with their selected programmes, the programme they were admitted to and
/// contact details.
#[derive(Debug, Clone, PartialEq, Default, uniffi::Record)]
pub struct ProgrammeSubmission {
    pub f4indexno: String,
    pub f6indexno: String,
    /// Comma-separated programme codes in order of preference.
    pub selected_programmes: String,
    pub programme_admitted: String,
    pub admission_status: String,
    pub date_of_birth: String,
    pub mobile_number: Option<String>,
    pub other_mobile_number: Option<String>,
    pub email_address: Option<String>,
    pub reason: Option<String>,
    /// `Tanzanian` when absent.
    pub nationality: Option<String>,
    /// `None` when absent.
    pub impairment: Option<String>,
}

impl ProgrammeSubmission {
    pub(crate) fn to_parameters(&self) -> Value {
        Mapping::new()
            .with("f4indexno", &self.f4indexno)
            .with("f6indexno", &self.f6indexno)
            .with("SelectedProgrammes", &self.selected_programmes)
            .with("MobileNumber", self.mobile_number.as_deref())
            .with(
                "OtherMobileNumber",
                self.other_mobile_number.as_deref().unwrap_or_default(),
            )
            .with("EmailAddress", self.email_address.as_deref())
            .with("AdmissionStatus", &self.admission_status)
            .with("ProgrammeAdmitted", &self.programme_admitted)
            .with("Reason", self.reason.as_deref())
            .with(
                "Nationality",
                self.nationality.as_deref().unwrap_or(DEFAULT_NATIONALITY),
            )
            .with(
                "Impairment",
                self.impairment.as_deref().unwrap_or(DEFAULT_IMPAIRMENT),
            )
            .with("DateOfBirth", &self.date_of_birth)
            .into()
    }
}
