use crate::domain::model::{Chart, Gender, UserProfile};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
}

/// Which narrative backend the analyzer talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    #[default]
    Function,
    Chat,
    Offline,
}

pub trait ConfigProvider: Send + Sync {
    fn service_mode(&self) -> ServiceMode;
    fn service_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn model(&self) -> &str;
    fn temperature(&self) -> f32;
    fn max_tokens(&self) -> u32;
    fn timeout_seconds(&self) -> u64;
    fn session_dir(&self) -> &str;
}

/// The part of the profile that is sent to the narrative service.
/// Contact details stay local.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeSubject {
    pub name: String,
    pub gender: Gender,
    pub birth_year: i32,
    pub birth_month: u32,
    pub birth_day: u32,
    pub birth_hour: u8,
    pub birth_place: String,
    pub is_lunar: bool,
}

impl From<&UserProfile> for NarrativeSubject {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            gender: profile.gender,
            birth_year: profile.birth_year,
            birth_month: profile.birth_month,
            birth_day: profile.birth_day,
            birth_hour: profile.birth_hour,
            birth_place: profile.birth_place.clone(),
            is_lunar: profile.is_lunar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeRequest {
    pub bazi_data: Chart,
    pub user_data: NarrativeSubject,
}

impl NarrativeRequest {
    pub fn new(chart: &Chart, profile: &UserProfile) -> Self {
        Self {
            bazi_data: chart.clone(),
            user_data: NarrativeSubject::from(profile),
        }
    }
}

/// Remote producer of free-form sectioned text. One attempt per call.
#[async_trait]
pub trait NarrativeService: Send + Sync {
    async fn narrate(&self, request: &NarrativeRequest) -> Result<String>;
}

#[async_trait]
impl NarrativeService for Box<dyn NarrativeService> {
    async fn narrate(&self, request: &NarrativeRequest) -> Result<String> {
        (**self).narrate(request).await
    }
}

impl std::str::FromStr for ServiceMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "function" => Ok(ServiceMode::Function),
            "chat" => Ok(ServiceMode::Chat),
            "offline" => Ok(ServiceMode::Offline),
            other => Err(format!(
                "unknown service mode '{}', expected function, chat or offline",
                other
            )),
        }
    }
}
