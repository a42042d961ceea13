// ==========================================
// 船舶正午报告控制台 - 报告条目领域模型
// ==========================================
// 职责: 正午报告条目 (ReportEntry)、装载状态、报告类型目录
// 对齐: 后端 JSON 字段 Vessel_name / Date / Laden_Ballst / Report_Type
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 日期序列化格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 报告类型目录（仅用于表单提示，客户端不校验）
pub const REPORT_TYPES: [&str; 6] = [
    "At Sea",
    "Arrival",
    "Arrival At Berth",
    "In Port",
    "Departure From Berth",
    "Departure",
];

// ==========================================
// ReportEntry - 正午报告条目
// ==========================================
// 红线: 提交后不可变，仅矛盾对话中的纠正动作可改写 laden_ballast / report_type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    #[serde(rename = "Vessel_name")]
    pub vessel_name: String,

    #[serde(
        rename = "Date",
        serialize_with = "serialize_date",
        deserialize_with = "deserialize_date"
    )]
    pub date: NaiveDate,

    /// 装载状态（字符串值，客户端不校验）
    #[serde(rename = "Laden_Ballst")]
    pub laden_ballast: String,

    #[serde(rename = "Report_Type")]
    pub report_type: String,
}

impl ReportEntry {
    pub fn new(
        vessel_name: impl Into<String>,
        date: NaiveDate,
        laden_ballast: impl Into<String>,
        report_type: impl Into<String>,
    ) -> Self {
        Self {
            vessel_name: vessel_name.into(),
            date,
            laden_ballast: laden_ballast.into(),
            report_type: report_type.into(),
        }
    }

    /// 日期的线上表示（YYYY-MM-DD）
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_report_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("无法解析日期: {}", raw))
    })
}

/// 解析后端返回的日期
///
/// 后端存储中混有纯日期和带时间的字符串，这里只保留日历日期。
///
/// # 支持格式
/// - 2025-05-01
/// - 2025-05-01T08:30:00 / 2025-05-01T08:30:00.123
/// - 2025-05-01 08:30:00
pub fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

// ==========================================
// LadenBallast - 装载状态
// ==========================================
// Laden: 载货; Ballast: 压载（空载）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LadenBallast {
    #[default]
    Laden,
    Ballast,
}

impl LadenBallast {
    pub fn as_str(&self) -> &'static str {
        match self {
            LadenBallast::Laden => "Laden",
            LadenBallast::Ballast => "Ballast",
        }
    }
}

impl fmt::Display for LadenBallast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
