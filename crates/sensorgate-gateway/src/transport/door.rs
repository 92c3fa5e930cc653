use crate::actuator::Door;
use crate::app_state::AppState;
use crate::error::ApiError;

/// Forward to the actuator; count the opening only once it succeeded.
pub async fn open(state: AppState, door: Door) -> Result<&'static str, ApiError> {
    if let Err(e) = state.actuator().open(door).await {
        tracing::warn!(door = door.as_str(), error = %e, "door open failed");
        return Err(e.into());
    }

    state.sensors().door_counter(door).inc();
    tracing::info!(door = door.as_str(), "door opened");
    Ok(door.opened_message())
}
