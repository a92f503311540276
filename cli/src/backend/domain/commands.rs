//! Domain-level command and result types.
//!
//! These structs are used by services inside the domain layer. The CLI (or
//! any other frontend) maps its arguments onto these internal types.

pub mod check_in {
    use serde::Serialize;

    use crate::backend::domain::models::check_in::CheckIn;
    use shared::DerivedMood;

    /// Input for setting the grump level directly.
    #[derive(Debug, Clone)]
    pub struct SetLevelCommand {
        pub level: i32,
    }

    /// Input for stepping the level by a signed amount.
    #[derive(Debug, Clone)]
    pub struct NudgeLevelCommand {
        pub delta: i32,
    }

    /// Input for jumping to one of the five quick-set presets (slots 1-5).
    #[derive(Debug, Clone)]
    pub struct QuickSetCommand {
        pub slot: u8,
    }

    /// Input for setting the cup count.
    #[derive(Debug, Clone)]
    pub struct SetCupsCommand {
        pub cups: u32,
    }

    /// Input for setting the display name.
    #[derive(Debug, Clone)]
    pub struct SetNameCommand {
        pub name: String,
    }

    /// Values lifted out of a share link. Missing or malformed query
    /// parameters stay `None` and leave the current state untouched.
    #[derive(Debug, Clone, Default)]
    pub struct ImportCommand {
        pub level: Option<i32>,
        pub cups: Option<u32>,
        pub name: Option<String>,
    }

    /// A check-in state plus everything derived from it.
    #[derive(Debug, Clone, Serialize)]
    pub struct CheckInResult {
        pub check_in: CheckIn,
        pub derived: DerivedMood,
    }
}
