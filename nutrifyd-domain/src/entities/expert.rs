use serde::Serialize;

/// A consultant listed in the expert directory
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Expert {
    /// Directory identifier
    pub id: u32,

    /// Full name with title
    pub name: &'static str,

    /// Area of practice (e.g. "Weight Management")
    pub specialty: &'static str,

    /// Years of professional experience
    pub years_experience: u8,

    /// Per-session consultation fee in US dollars
    pub session_fee_usd: u32,

    /// Average user rating out of 5.0
    pub rating: f32,
}
