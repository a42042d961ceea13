// ==========================================
// 船舶正午报告控制台 - 录入表单
// ==========================================
// 职责: 保存表单字段原始输入，转换为 ReportEntry
// 说明: 装载状态不在客户端校验，仅检查必填与日期格式
// ==========================================

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

use crate::domain::{LadenBallast, ReportEntry, DATE_FORMAT};
use crate::i18n::t_with_args;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    VesselName,
    Date,
    LadenBallast,
    ReportType,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::VesselName => "vessel_name",
            FormField::Date => "date",
            FormField::LadenBallast => "laden_ballast",
            FormField::ReportType => "report_type",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 表单校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("必填字段为空: {0}")]
    Missing(FormField),

    #[error("日期格式错误（应为YYYY-MM-DD）: {value}")]
    InvalidDate { value: String },
}

impl FormError {
    /// 面向用户的本地化提示
    pub fn message(&self) -> String {
        match self {
            FormError::Missing(field) => t_with_args("form.required", &[("field", field.label())]),
            FormError::InvalidDate { value } => t_with_args("form.invalid_date", &[("value", value.as_str())]),
        }
    }
}

// ==========================================
// EntryForm - 表单状态
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub vessel_name: String,
    pub date: String,
    pub laden_ballast: String,
    pub report_type: String,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            vessel_name: String::new(),
            date: String::new(),
            laden_ballast: LadenBallast::default().to_string(),
            report_type: String::new(),
        }
    }
}

impl EntryForm {
    pub fn new(
        vessel_name: impl Into<String>,
        date: impl Into<String>,
        laden_ballast: impl Into<String>,
        report_type: impl Into<String>,
    ) -> Self {
        Self {
            vessel_name: vessel_name.into(),
            date: date.into(),
            laden_ballast: laden_ballast.into(),
            report_type: report_type.into(),
        }
    }

    /// 恢复初始值
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::VesselName => self.vessel_name = value,
            FormField::Date => self.date = value,
            FormField::LadenBallast => self.laden_ballast = value,
            FormField::ReportType => self.report_type = value,
        }
    }

    /// 转换为报告条目
    ///
    /// # 返回
    /// - Ok(ReportEntry): 字段原样保留（日期已解析）
    /// - Err(FormError): 必填字段为空或日期无法解析
    pub fn to_entry(&self) -> Result<ReportEntry, FormError> {
        if self.vessel_name.trim().is_empty() {
            return Err(FormError::Missing(FormField::VesselName));
        }
        if self.date.trim().is_empty() {
            return Err(FormError::Missing(FormField::Date));
        }
        if self.report_type.trim().is_empty() {
            return Err(FormError::Missing(FormField::ReportType));
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|_| {
            FormError::InvalidDate {
                value: self.date.clone(),
            }
        })?;

        Ok(ReportEntry {
            vessel_name: self.vessel_name.clone(),
            date,
            laden_ballast: self.laden_ballast.clone(),
            report_type: self.report_type.clone(),
        })
    }
}

impl fmt::Display for EntryForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vessel_name   = {}", self.vessel_name)?;
        writeln!(f, "date          = {}", self.date)?;
        writeln!(f, "laden_ballast = {}", self.laden_ballast)?;
        write!(f, "report_type   = {}", self.report_type)
    }
}
