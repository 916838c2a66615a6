use axum::{Json, extract::State};

use crate::domain::types::BirthDetails;
use crate::error::EngineError;
use crate::state::AppState;
use crate::usecase::chart::{CalculateChartInput, CalculateChartUseCase};

pub async fn calculate_chart(
    State(state): State<AppState>,
    Json(details): Json<BirthDetails>,
) -> Result<Json<serde_json::Value>, EngineError> {
    let usecase = CalculateChartUseCase {
        charts: state.chart_port(),
    };
    let chart = usecase.execute(CalculateChartInput { details })?;
    Ok(Json(chart))
}
