// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDate;
use noon_report_console::api::{ChatResponse, ContradictionCheckResponse};
use noon_report_console::ReportEntry;

// ==========================================
// ReportEntry 构建器
// ==========================================

pub struct EntryBuilder {
    vessel_name: String,
    date: NaiveDate,
    laden_ballast: String,
    report_type: String,
}

impl EntryBuilder {
    pub fn new(vessel_name: &str) -> Self {
        Self {
            vessel_name: vessel_name.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            laden_ballast: "Laden".to_string(),
            report_type: "At Sea".to_string(),
        }
    }

    pub fn date(mut self, y: i32, m: u32, d: u32) -> Self {
        self.date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.laden_ballast = status.to_string();
        self
    }

    pub fn report_type(mut self, report_type: &str) -> Self {
        self.report_type = report_type.to_string();
        self
    }

    pub fn build(self) -> ReportEntry {
        ReportEntry::new(self.vessel_name, self.date, self.laden_ballast, self.report_type)
    }
}

// ==========================================
// 后端响应构建函数
// ==========================================

pub fn no_contradiction() -> ContradictionCheckResponse {
    ContradictionCheckResponse {
        is_contradiction: false,
        previous_status: None,
        reason: None,
    }
}

pub fn contradiction(previous_status: &str, reason: Option<&str>) -> ContradictionCheckResponse {
    ContradictionCheckResponse {
        is_contradiction: true,
        previous_status: Some(previous_status.to_string()),
        reason: reason.map(str::to_string),
    }
}

pub fn bot_reply(text: &str, action: Option<&str>) -> ChatResponse {
    ChatResponse {
        bot_response: text.to_string(),
        action: action.map(str::to_string),
        corrected_status: None,
        corrected_report_type: None,
    }
}

pub fn bot_correct_status(text: &str, status: &str) -> ChatResponse {
    ChatResponse {
        corrected_status: Some(status.to_string()),
        ..bot_reply(text, Some("correct_status"))
    }
}

pub fn bot_correct_report_type(text: &str, report_type: &str) -> ChatResponse {
    ChatResponse {
        corrected_report_type: Some(report_type.to_string()),
        ..bot_reply(text, Some("correct_report_type"))
    }
}

/// 两条船的样例数据（与后端演示数据同构）
pub fn fleet_rows() -> Vec<ReportEntry> {
    vec![
        EntryBuilder::new("Navig8 Messi").date(2025, 4, 20).build(),
        EntryBuilder::new("Navig8 Messi").date(2025, 4, 21).report_type("Arrival").build(),
        EntryBuilder::new("Navig8 Guard").date(2025, 4, 20).status("Ballast").build(),
        EntryBuilder::new("Navig8 Guard").date(2025, 4, 22).status("Ballast").report_type("Departure").build(),
    ]
}
