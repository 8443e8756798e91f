//! 會話資料：表單頁寫入、結果頁讀取

use crate::core::calendar;
use crate::domain::model::{AnalysisReport, Chart, Gender, UserProfile};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const USER_DATA_KEY: &str = "userData";
pub const BAZI_DATA_KEY: &str = "baziData";
pub const ANALYSIS_RESULT_KEY: &str = "analysisResult";

/// Everything the results view needs for one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub profile: UserProfile,
    pub chart: Chart,
    pub report: AnalysisReport,
    pub is_demo: bool,
}

pub struct SessionStore<S: Storage> {
    storage: S,
}

fn record_path(key: &str) -> String {
    format!("{}.json", key)
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    async fn write_record<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let data = serde_json::to_vec_pretty(value)?;
        self.storage.write_file(&record_path(key), &data).await
    }

    async fn read_record<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = record_path(key);
        if !self.storage.exists(&path).await {
            return Ok(None);
        }
        let data = self.storage.read_file(&path).await?;
        Ok(Some(serde_json::from_slice(&data)?))
    }

    /// Write the three records of one submission.
    pub async fn save(
        &self,
        profile: &UserProfile,
        chart: &Chart,
        report: &AnalysisReport,
    ) -> Result<()> {
        self.write_record(USER_DATA_KEY, profile).await?;
        self.write_record(BAZI_DATA_KEY, chart).await?;
        self.write_record(ANALYSIS_RESULT_KEY, report).await?;
        tracing::debug!("Session records written for {}", profile.name);
        Ok(())
    }

    /// `None` when no submission has been stored yet.
    pub async fn load(&self) -> Result<Option<Submission>> {
        let Some(profile) = self.read_record::<UserProfile>(USER_DATA_KEY).await? else {
            return Ok(None);
        };
        let Some(chart) = self.read_record::<Chart>(BAZI_DATA_KEY).await? else {
            return Ok(None);
        };
        let report = self
            .read_record::<AnalysisReport>(ANALYSIS_RESULT_KEY)
            .await?
            .unwrap_or_default();

        Ok(Some(Submission {
            profile,
            chart,
            report,
            is_demo: false,
        }))
    }

    /// Stored submission, or the demo content when nothing usable is stored.
    pub async fn load_or_demo(&self) -> Submission {
        match self.load().await {
            Ok(Some(submission)) => submission,
            Ok(None) => {
                tracing::info!("No session data found, showing demo data");
                demo_submission()
            }
            Err(e) => {
                tracing::warn!("Session data unreadable ({}), showing demo data", e);
                demo_submission()
            }
        }
    }
}

/// 演示資料
pub fn demo_submission() -> Submission {
    let profile = UserProfile {
        name: "张三".to_string(),
        gender: Gender::Male,
        birth_year: 1990,
        birth_month: 8,
        birth_day: 15,
        birth_hour: 6,
        birth_place: "北京市海淀区".to_string(),
        is_lunar: false,
        country_code: None,
        phone: None,
    };
    let chart = calendar::chart_for(&profile);
    let report = AnalysisReport {
        general: "这是一份演示数据，请通过表单提交您的个人信息，获取真实的八字分析结果。"
            .to_string(),
        personality: "性格温和，做事有条理，善于思考。".to_string(),
        career: "事业发展平稳，中年有贵人相助。".to_string(),
        love: "感情生活丰富，婚姻和睦。".to_string(),
        health: "身体健康，注意保养肝脏。".to_string(),
        wealth: "财运平稳，中年后逐渐好转。".to_string(),
    };

    Submission {
        profile,
        chart,
        report,
        is_demo: true,
    }
}
