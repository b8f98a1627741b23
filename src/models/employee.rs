/// One line of the employee roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub resource_no: String,
    pub personal_number: String,
}

impl EmployeeRecord {
    pub fn new(resource_no: impl Into<String>, personal_number: impl Into<String>) -> Self {
        Self {
            resource_no: resource_no.into(),
            personal_number: personal_number.into(),
        }
    }
}
