pub mod v1 {
    pub mod daily_time_closed;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "event_type")]
pub enum AttendanceEvent {
    #[serde(rename = "DailyTimeClosed")]
    DailyTimeClosedV1(v1::daily_time_closed::DailyTimeClosedV1),
}

impl AttendanceEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            AttendanceEvent::DailyTimeClosedV1(_) => "DailyTimeClosed",
        }
    }
}
