use crate::domain::repository::ChartPort;
use crate::domain::types::BirthDetails;

/// Adapter delegating chart calculation to the `jathagam` collaborator.
#[derive(Clone, Copy, Default)]
pub struct JathagamChartPort;

impl ChartPort for JathagamChartPort {
    fn calculate(&self, details: &BirthDetails) -> anyhow::Result<serde_json::Value> {
        let chart = jathagam::calculate_jathagam(
            details.year,
            details.month,
            details.day,
            details.hour,
            details.minute,
            details.lat,
            details.lon,
        )?;
        Ok(serde_json::to_value(chart)?)
    }
}
