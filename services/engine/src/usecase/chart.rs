use crate::domain::repository::ChartPort;
use crate::domain::types::BirthDetails;
use crate::error::EngineError;

pub struct CalculateChartInput {
    pub details: BirthDetails,
}

/// Pass-through to the calculation collaborator: the result is returned
/// untransformed; failures surface with the collaborator's message.
pub struct CalculateChartUseCase<C: ChartPort> {
    pub charts: C,
}

impl<C: ChartPort> CalculateChartUseCase<C> {
    pub fn execute(&self, input: CalculateChartInput) -> Result<serde_json::Value, EngineError> {
        self.charts
            .calculate(&input.details)
            .map_err(EngineError::Calculation)
    }
}
