/// The three TCU API families. Each operation is served by exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum Endpoint {
    /// Applicant registration, status checks and programme submissions.
    Applicant,
    /// Transfers, confirmation codes and admitted lists.
    Admission,
    /// Statistics uploads.
    Dashboard,
}
