use dioxus::prelude::*;

use crate::shared::types::{HistoryRecordDto, PredictOutcome};

#[server(Predict)]
pub async fn predict(days: i32) -> Result<PredictOutcome, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::GLOBAL_CLIENT;
        use dioxus::logger::tracing::{error, warn};

        let Some(client) = GLOBAL_CLIENT.get() else {
            error!("predict: service client not initialized");
            return Ok(PredictOutcome::Failed { error: None });
        };
        match client.predict(days).await {
            Ok(p) => Ok(PredictOutcome::Predicted(p)),
            Err(e) => {
                warn!("predict({days}) failed: {e}");
                Ok(PredictOutcome::Failed {
                    error: e.service_message().map(str::to_string),
                })
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = days;
        Ok(PredictOutcome::Failed { error: None })
    }
}

#[server(GetHistory)]
pub async fn history() -> Result<Vec<HistoryRecordDto>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::GLOBAL_CLIENT;

        let Some(client) = GLOBAL_CLIENT.get() else {
            return Err(ServerFnError::ServerError(
                "service client not initialized".into(),
            ));
        };
        client
            .history()
            .await
            .map_err(|e| ServerFnError::ServerError(e.to_string()))
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(vec![])
    }
}
