use crate::models::programme_submission::{DEFAULT_IMPAIRMENT, DEFAULT_NATIONALITY};
use crate::models::value::{Mapping, Value};

/// An applicant whose details changed since the last submission.
#[derive(Debug, Clone, PartialEq, Default, uniffi::Record)]
pub struct Resubmission {
    pub f4indexno: String,
    pub f6indexno: String,
    pub selected_programmes: String,
    pub programme_admitted: String,
    pub admission_status: String,
    pub date_of_birth: String,
    pub mobile_number: Option<String>,
    pub email_address: Option<String>,
    pub reason: Option<String>,
    pub nationality: Option<String>,
    pub impairment: Option<String>,
    pub other_f4indexno: Vec<String>,
    pub other_f6indexno: Vec<String>,
}

impl Resubmission {
    /// Empty fields are left out entirely.
    pub(crate) fn to_parameters(&self) -> Value {
        let mut parameters = Mapping::new()
            .with("f4indexno", &self.f4indexno)
            .with("f6indexno", &self.f6indexno)
            .with("SelectedProgrammes", &self.selected_programmes)
            .with("MobileNumber", self.mobile_number.as_deref())
            .with("EmailAddress", self.email_address.as_deref())
            .with("AdmissionStatus", &self.admission_status)
            .with("ProgrammeAdmitted", &self.programme_admitted)
            .with("Category", "Eligible")
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
            .with("Other_f4indexno", self.other_f4indexno.join(","))
            .with("Other_f6indexno", self.other_f6indexno.join(","));

        parameters.retain(|_, value| !value.is_empty());
        parameters.into()
    }
}
