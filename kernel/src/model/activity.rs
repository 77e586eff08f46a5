use crate::model::id::UserId;
use uuid::Uuid;

/// Fire-and-forget audit entry written as a side effect of both
/// transactions. The engine only emits these; delivery and retention are
/// somebody else's problem.
#[derive(Debug)]
pub struct ActivityRecord {
    pub actor: UserId,
    pub action: ActivityAction,
    pub entity_id: Uuid,
    pub detail: String,
}

#[derive(Debug, Clone, Copy)]
pub enum ActivityAction {
    BookingCreated,
    BookingCanceled,
    UnitRegistered,
    UnitDeactivated,
    BlackoutCreated,
    BlackoutDeleted,
    CreditsDeposited,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::BookingCreated => "booking_created",
            ActivityAction::BookingCanceled => "booking_canceled",
            ActivityAction::UnitRegistered => "unit_registered",
            ActivityAction::UnitDeactivated => "unit_deactivated",
            ActivityAction::BlackoutCreated => "blackout_created",
            ActivityAction::BlackoutDeleted => "blackout_deleted",
            ActivityAction::CreditsDeposited => "credits_deposited",
        }
    }
}
