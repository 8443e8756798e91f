use crate::core::{narrative, sections};
use crate::domain::model::{AnalysisReport, Chart, UserProfile};
use crate::domain::ports::{NarrativeRequest, NarrativeService};

/// Outcome of the single narrative-service attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceResult {
    Success(String),
    Failure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisState {
    Idle,
    Requesting,
    Parsing,
    Failed,
    FallbackGenerating,
    Done,
}

fn transition(from: AnalysisState, to: AnalysisState) -> AnalysisState {
    tracing::debug!("Analysis state {:?} -> {:?}", from, to);
    to
}

/// Turn a service result into a report. Never fails: anything that is not
/// usable service text ends in the template bank.
pub fn merge(result: ServiceResult, chart: &Chart, profile: &UserProfile) -> AnalysisReport {
    let mut state = AnalysisState::Requesting;

    let parsed = match result {
        ServiceResult::Success(text) if !text.trim().is_empty() => {
            state = transition(state, AnalysisState::Parsing);
            let report = sections::parse_analysis_text(&text);
            if report.is_blank() {
                None
            } else {
                Some(report)
            }
        }
        ServiceResult::Success(_) => {
            tracing::info!("Narrative service returned no analysis, using template");
            None
        }
        ServiceResult::Failure(reason) => {
            tracing::warn!("Narrative service failed: {}", reason);
            None
        }
    };

    let report = match parsed {
        Some(report) => report,
        None => {
            state = transition(state, AnalysisState::Failed);
            state = transition(state, AnalysisState::FallbackGenerating);
            narrative::generate(&chart.tally, &profile.name, profile.gender)
        }
    };

    transition(state, AnalysisState::Done);
    report
}

pub struct Analyzer<N: NarrativeService> {
    service: N,
}

impl<N: NarrativeService> Analyzer<N> {
    pub fn new(service: N) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &N {
        &self.service
    }

    /// Ask the narrative service once and fall back to the template bank on
    /// any failure. Always yields a displayable report.
    pub async fn analyze(&self, chart: &Chart, profile: &UserProfile) -> AnalysisReport {
        transition(AnalysisState::Idle, AnalysisState::Requesting);
        let request = NarrativeRequest::new(chart, profile);

        tracing::info!("Requesting narrative analysis for {}", profile.name);
        let result = match self.service.narrate(&request).await {
            Ok(text) => ServiceResult::Success(text),
            Err(e) => ServiceResult::Failure(e.to_string()),
        };

        merge(result, chart, profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar;
    use crate::domain::model::{Gender, SectionKind};
    use crate::utils::error::{BaziError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubService {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl StubService {
        fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl NarrativeService for StubService {
        async fn narrate(&self, _request: &NarrativeRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(BaziError::ServiceStatusError {
                    status: 502,
                    message: "bad gateway".to_string(),
                }),
            }
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            name: "王五".to_string(),
            gender: Gender::Male,
            birth_year: 1979,
            birth_month: 11,
            birth_day: 3,
            birth_hour: 9,
            birth_place: "杭州".to_string(),
            is_lunar: false,
            country_code: None,
            phone: None,
        }
    }

    #[test]
    fn test_merge_failure_uses_template() {
        let profile = profile();
        let chart = calendar::chart_for(&profile);
        let report = merge(
            ServiceResult::Failure("timeout".to_string()),
            &chart,
            &profile,
        );
        assert_eq!(
            report,
            narrative::generate(&chart.tally, &profile.name, profile.gender)
        );
    }

    #[test]
    fn test_merge_blank_success_uses_template() {
        let profile = profile();
        let chart = calendar::chart_for(&profile);
        let report = merge(ServiceResult::Success("  \n ".to_string()), &chart, &profile);
        for kind in SectionKind::ALL {
            assert!(!report.section(kind).is_empty());
        }
    }

    #[test]
    fn test_merge_success_parses_sections() {
        let profile = profile();
        let chart = calendar::chart_for(&profile);
        let text = "总体分析：好\n性格特质：稳\n事业财运：顺\n感情姻缘：和\n健康状况：安\n财富运势：丰";
        let report = merge(ServiceResult::Success(text.to_string()), &chart, &profile);
        assert_eq!(report.general, "总体分析：好");
        assert_eq!(report.wealth, "财富运势：丰");
    }

    #[tokio::test]
    async fn test_analyze_calls_service_once() {
        let profile = profile();
        let chart = calendar::chart_for(&profile);
        let analyzer = Analyzer::new(StubService::failing());

        let report = analyzer.analyze(&chart, &profile).await;

        assert_eq!(analyzer.service().calls.load(Ordering::SeqCst), 1);
        for kind in SectionKind::ALL {
            assert!(!report.section(kind).trim().is_empty());
        }
    }

    #[test]
    fn test_analyze_unheaded_text_becomes_general() {
        let profile = profile();
        let chart = calendar::chart_for(&profile);
        let analyzer = Analyzer::new(StubService::replying("命盘平稳，宜守不宜攻。"));

        let report = tokio_test::block_on(analyzer.analyze(&chart, &profile));

        assert_eq!(report.general, "命盘平稳，宜守不宜攻。");
        assert!(report.personality.is_empty());
    }
}
