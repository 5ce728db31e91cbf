pub mod dto;

use std::env;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::AppError;
use crate::models::{TimetableSlot, VirtualSession};

/// Connection settings for the school platform backend.
#[derive(Clone, Debug)]
pub struct PlatformConfig {
    pub base_url: String,
    pub api_token: String,
}

impl PlatformConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let base_url = env::var("PLATFORM_API_URL")
            .map_err(|_| AppError::BadRequest("PLATFORM_API_URL is not set".to_string()))?;
        let api_token = env::var("PLATFORM_API_TOKEN")
            .map_err(|_| AppError::BadRequest("PLATFORM_API_TOKEN is not set".to_string()))?;

        Ok(Self {
            base_url,
            api_token,
        })
    }
}

/// The platform backend's schedule endpoints.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    async fn fetch_timetable(&self, class_id: &str) -> Result<Vec<TimetableSlot>, AppError>;
    async fn fetch_virtual_sessions(
        &self,
        class_id: &str,
    ) -> Result<Vec<VirtualSession>, AppError>;
}

pub struct PlatformHttpClient {
    client: Client,
    config: PlatformConfig,
}

impl PlatformHttpClient {
    pub fn new(config: PlatformConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::BadRequest(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    async fn get_items<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, AppError> {
        let url = format!(
            "{}/api/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            path
        );

        let response = self
            .client
            .get(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_token),
            )
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("request to {} failed: {}", url, e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "{} returned {}: {}",
                url, status, body
            )));
        }

        let parsed: dto::ItemsResponse<T> = response.json().await.map_err(|e| {
            AppError::Upstream(format!("unparseable response from {}: {}", url, e))
        })?;

        Ok(parsed.items)
    }
}

#[async_trait]
impl PlatformClient for PlatformHttpClient {
    async fn fetch_timetable(&self, class_id: &str) -> Result<Vec<TimetableSlot>, AppError> {
        let rows: Vec<dto::TimetableSlotDto> = self
            .get_items(&format!("classes/{}/timetable", class_id))
            .await?;

        let mut slots = Vec::with_capacity(rows.len());
        for row in rows {
            match row.into_model() {
                Some(slot) => slots.push(slot),
                None => {
                    warn!(
                        "dropping timetable row without id or coordinate for class {}",
                        class_id
                    );
                }
            }
        }
        Ok(slots)
    }

    async fn fetch_virtual_sessions(
        &self,
        class_id: &str,
    ) -> Result<Vec<VirtualSession>, AppError> {
        let rows: Vec<dto::VirtualSessionDto> = self
            .get_items(&format!("classes/{}/virtual-sessions", class_id))
            .await?;

        let mut sessions = Vec::with_capacity(rows.len());
        for row in rows {
            match row.into_model() {
                Some(session) => sessions.push(session),
                None => warn!("dropping virtual session without id for class {}", class_id),
            }
        }
        Ok(sessions)
    }
}

/// Offline stand-in: every class has an empty schedule.
pub struct NoopPlatformClient;

#[async_trait]
impl PlatformClient for NoopPlatformClient {
    async fn fetch_timetable(&self, _class_id: &str) -> Result<Vec<TimetableSlot>, AppError> {
        Ok(Vec::new())
    }

    async fn fetch_virtual_sessions(
        &self,
        _class_id: &str,
    ) -> Result<Vec<VirtualSession>, AppError> {
        Ok(Vec::new())
    }
}
