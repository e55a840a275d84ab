use serde::Serialize;

/// Duty status recorded by a status change.
///
/// The variant order is the lane order of the log sheet, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DutyStatus {
    OffDuty,          // OFF
    SleeperBerth,     // SB
    Driving,          // DR
    OnDutyNotDriving, // ON
}

impl DutyStatus {
    /// All statuses in lane order.
    pub const LANES: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF",
            DutyStatus::SleeperBerth => "SB",
            DutyStatus::Driving => "DR",
            DutyStatus::OnDutyNotDriving => "ON",
        }
    }

    /// Convert a backend code (any case) → enum
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "OFF" => Some(DutyStatus::OffDuty),
            "SB" => Some(DutyStatus::SleeperBerth),
            "DR" => Some(DutyStatus::Driving),
            "ON" => Some(DutyStatus::OnDutyNotDriving),
            _ => None,
        }
    }

    /// Lane index on the log sheet (0 = top).
    pub fn lane(&self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::SleeperBerth => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDutyNotDriving => 3,
        }
    }

    /// Vertical center of this status' lane for the given row height.
    pub fn lane_center(&self, row_height: f64) -> f64 {
        row_height * (self.lane() as f64 + 0.5)
    }
}
