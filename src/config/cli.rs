use crate::config::toml_config::{TomlConfig, DEFAULT_CONFIG_PATH};
use crate::domain::model::{Gender, UserProfile, UNKNOWN_HOUR};
use crate::domain::ports::ServiceMode;
use clap::Parser;

/// 表單欄位與配置覆蓋
#[derive(Debug, Clone, Parser)]
#[command(name = "bazi-report")]
#[command(about = "Compute a four-pillars chart and write a narrative reading")]
pub struct CliConfig {
    /// 姓名
    #[arg(long)]
    pub name: String,

    /// male / female (男 / 女)
    #[arg(long)]
    pub gender: Gender,

    #[arg(long)]
    pub year: i32,

    #[arg(long)]
    pub month: u32,

    #[arg(long)]
    pub day: u32,

    /// Shichen index 0-11 (子 ... 亥), 12 when unknown
    #[arg(long, default_value_t = UNKNOWN_HOUR)]
    pub hour: u8,

    /// 出生地點
    #[arg(long)]
    pub place: String,

    /// The date was entered on the lunar calendar
    #[arg(long)]
    pub lunar: bool,

    #[arg(long)]
    pub country_code: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Override service mode: function, chat or offline
    #[arg(long)]
    pub mode: Option<ServiceMode>,

    /// Override service endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override session directory
    #[arg(long)]
    pub session_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.trim().to_string(),
            gender: self.gender,
            birth_year: self.year,
            birth_month: self.month,
            birth_day: self.day,
            birth_hour: self.hour,
            birth_place: self.place.trim().to_string(),
            is_lunar: self.lunar,
            country_code: self.country_code.clone(),
            phone: self.phone.clone(),
        }
    }

    /// 命令列參數優先於配置檔
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(mode) = self.mode {
            config.service.mode = mode;
            tracing::info!("🔧 Service mode overridden to: {:?}", mode);
        }
        if let Some(endpoint) = &self.endpoint {
            config.service.endpoint = Some(endpoint.clone());
        }
        if let Some(dir) = &self.session_dir {
            config.session.dir = Some(dir.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigProvider;

    #[test]
    fn test_parse_form_arguments() {
        let cli = CliConfig::try_parse_from([
            "bazi-report",
            "--name",
            " 李四 ",
            "--gender",
            "女",
            "--year",
            "1985",
            "--month",
            "3",
            "--day",
            "9",
            "--place",
            "上海",
            "--lunar",
        ])
        .unwrap();

        let profile = cli.to_profile();
        assert_eq!(profile.name, "李四");
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.birth_hour, UNKNOWN_HOUR);
        assert!(profile.is_lunar);
        assert_eq!(profile.phone, None);
        assert_eq!(cli.config, DEFAULT_CONFIG_PATH);
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let cli = CliConfig::try_parse_from([
            "bazi-report",
            "--name=张三",
            "--gender=male",
            "--year=1990",
            "--month=8",
            "--day=15",
            "--hour=6",
            "--place=北京",
            "--mode=offline",
            "--session-dir=/tmp/override",
        ])
        .unwrap();

        let mut config = TomlConfig::from_toml_str("[session]\ndir = \"./from-file\"\n").unwrap();
        cli.apply_overrides(&mut config);

        assert_eq!(config.service_mode(), ServiceMode::Offline);
        assert_eq!(config.session_dir(), "/tmp/override");
    }

    #[test]
    fn test_rejects_unknown_gender() {
        let result = CliConfig::try_parse_from([
            "bazi-report",
            "--name=张三",
            "--gender=robot",
            "--year=1990",
            "--month=8",
            "--day=15",
            "--place=北京",
        ]);
        assert!(result.is_err());
    }
}
