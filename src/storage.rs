use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("LEDGER_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/ledger.json"))
}

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse ledger file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read ledger file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::toggle_settled_month;

    fn scratch_path(tag: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!(
            "show_ledger_{tag}_{}_{}.json",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_the_starter_state() {
        let data = load_data(&scratch_path("missing")).await;
        assert!(data.events.is_empty());
        assert_eq!(data.band_presets.len(), 5);
    }

    #[tokio::test]
    async fn corrupt_file_falls_back_to_the_starter_state() {
        let path = scratch_path("corrupt");
        fs::write(&path, b"{not json").await.unwrap();
        let data = load_data(&path).await;
        assert!(data.events.is_empty());
        assert_eq!(data.band_presets.len(), 5);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_state_survives_a_round_trip() {
        let path = scratch_path("roundtrip");
        let data = toggle_settled_month(AppData::default(), "2024-03");
        persist_data(&path, &data).await.unwrap();

        let loaded = load_data(&path).await;
        assert_eq!(loaded.settled_months, vec!["2024-03".to_string()]);
        assert_eq!(loaded.last_updated, data.last_updated);
        let _ = fs::remove_file(&path).await;
    }
}
