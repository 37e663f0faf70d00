use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseDay {
    pub employee_id: String,
    pub date: NaiveDate,
}
