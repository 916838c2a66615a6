use serde::Deserialize;

/// Birth details for chart calculation. Passed opaquely to the chart
/// port; the service never interprets the fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BirthDetails {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub lat: f64,
    pub lon: f64,
}

/// Queued OTP delivery job, drained by the background delivery worker.
#[derive(Debug, Clone)]
pub struct OtpEmail {
    pub to: String,
    pub code: String,
}

/// OTP code length in digits.
pub const OTP_CODE_LEN: usize = 6;
