// ==========================================
// 船舶正午报告控制台 - 录入控制台
// ==========================================
// 职责: 表单提交、数据表切换、矛盾对话三类事件的状态机
// 红线:
// - 所有操作取 &mut self，同一时刻最多一个后端请求
// - 最多一个矛盾会话；会话结束即清空对话历史与表单
// - 失败不重试、不产生成功提示，状态保持失败时的样子
// ==========================================

use crate::api::backend::NoonReportBackend;
use crate::api::dto::ContradictionCheckRequest;
use crate::app::error::{ConsoleError, ConsoleResult};
use crate::app::form::EntryForm;
use crate::app::session::{ContradictionSession, Resolution};
use crate::config::ConsoleConfig;
use crate::domain::{ChatAction, ChatMessage, ReportEntry};
use crate::i18n::{t, t_with_args};

/// 控制台选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// 显示数据时仅保留最近提交的船舶
    pub filter_latest_vessel: bool,
    /// 启动时加载并显示数据表
    pub load_on_start: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            filter_latest_vessel: true,
            load_on_start: true,
        }
    }
}

impl From<&ConsoleConfig> for ConsoleOptions {
    fn from(config: &ConsoleConfig) -> Self {
        Self {
            filter_latest_vessel: config.filter_latest_vessel,
            load_on_start: config.load_on_start,
        }
    }
}

/// 数据表视图
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataView {
    #[default]
    Hidden,
    Shown(Vec<ReportEntry>),
}

impl DataView {
    pub fn is_shown(&self) -> bool {
        matches!(self, DataView::Shown(_))
    }
}

/// 用户提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    EntryAdded,
    EntryConfirmed,
    StatusCorrected(String),
    ReportTypeCorrected(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::EntryAdded => t("notice.entry_added"),
            Notice::EntryConfirmed => t("notice.entry_confirmed"),
            Notice::StatusCorrected(status) => {
                t_with_args("notice.status_corrected", &[("status", status.as_str())])
            }
            Notice::ReportTypeCorrected(report_type) => {
                t_with_args("notice.report_type_corrected", &[("report_type", report_type.as_str())])
            }
        }
    }
}

impl From<Resolution> for Notice {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Confirmed => Notice::EntryConfirmed,
            Resolution::StatusCorrected(status) => Notice::StatusCorrected(status),
            Resolution::ReportTypeCorrected(report_type) => Notice::ReportTypeCorrected(report_type),
        }
    }
}

/// 提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 无矛盾，已直接保存
    Added(Notice),
    /// 检测到矛盾，已开启对话
    ContradictionOpened,
}

/// 对话一轮的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// 空输入，未发送
    Ignored,
    /// 会话继续，等待用户输入
    Pending(ChatAction),
    /// 会话已结束，条目已保存
    Resolved(Notice),
}

// ==========================================
// EntryConsole - 录入控制台
// ==========================================
pub struct EntryConsole<B: NoonReportBackend> {
    backend: B,
    options: ConsoleOptions,
    form: EntryForm,
    session: Option<ContradictionSession>,
    latest_vessel: Option<String>,
    data_view: DataView,
}

impl<B: NoonReportBackend> EntryConsole<B> {
    pub fn new(backend: B, options: ConsoleOptions) -> Self {
        Self {
            backend,
            options,
            form: EntryForm::default(),
            session: None,
            latest_vessel: None,
            data_view: DataView::Hidden,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn options(&self) -> ConsoleOptions {
        self.options
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    pub fn session(&self) -> Option<&ContradictionSession> {
        self.session.as_ref()
    }

    pub fn is_chat_open(&self) -> bool {
        self.session.is_some()
    }

    /// 当前会话的对话历史（无会话时为空）
    pub fn chat_history(&self) -> &[ChatMessage] {
        self.session
            .as_ref()
            .map(ContradictionSession::history)
            .unwrap_or(&[])
    }

    pub fn latest_vessel(&self) -> Option<&str> {
        self.latest_vessel.as_deref()
    }

    pub fn data_view(&self) -> &DataView {
        &self.data_view
    }

    /// 启动加载：拉取全部条目（不过滤）并显示
    pub async fn load_initial(&mut self) -> ConsoleResult<&DataView> {
        let rows = self.backend.get_noon_data().await?;
        tracing::info!(rows = rows.len(), "initial noon data loaded");
        self.data_view = DataView::Shown(rows);
        Ok(&self.data_view)
    }

    /// 提交表单
    ///
    /// # 流程
    /// 1. 隐藏数据表，记录最近船舶
    /// 2. check_contradiction
    /// 3. 无矛盾 → add_entry，重置表单；有矛盾 → 开启会话（单条机器人消息）
    pub async fn submit_entry(&mut self) -> ConsoleResult<SubmitOutcome> {
        let entry = self.form.to_entry()?;

        self.data_view = DataView::Hidden;
        self.latest_vessel = Some(entry.vessel_name.clone());

        let request = ContradictionCheckRequest::for_entry(&entry);
        let check = self.backend.check_contradiction(&request).await?;

        if check.is_contradiction {
            let opening = check
                .reason
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| t("chat.default_contradiction"));
            let session = ContradictionSession::start(entry, check.previous_status, opening);
            tracing::info!(
                session_id = %session.id(),
                vessel = %session.entry().vessel_name,
                previous_status = ?session.previous_status(),
                "contradiction session opened"
            );
            // 新会话替换旧会话，旧历史随之丢弃
            self.session = Some(session);
            return Ok(SubmitOutcome::ContradictionOpened);
        }

        self.backend.add_entry(&entry).await?;
        tracing::info!(vessel = %entry.vessel_name, date = %entry.date_label(), "entry added");
        self.session = None;
        self.form.reset();
        Ok(SubmitOutcome::Added(Notice::EntryAdded))
    }

    /// 切换数据表显示
    ///
    /// 隐藏 → 拉取数据（按最近船舶过滤）并显示；显示 → 隐藏，不拉取
    pub async fn toggle_data(&mut self) -> ConsoleResult<&DataView> {
        if self.data_view.is_shown() {
            self.data_view = DataView::Hidden;
            return Ok(&self.data_view);
        }

        let mut rows = self.backend.get_noon_data().await?;
        if self.options.filter_latest_vessel {
            if let Some(vessel) = self.latest_vessel.as_deref() {
                rows.retain(|row| row.vessel_name == vessel);
            }
        }
        tracing::debug!(rows = rows.len(), vessel = ?self.latest_vessel, "noon data shown");
        self.data_view = DataView::Shown(rows);
        Ok(&self.data_view)
    }

    /// 发送一条对话消息
    ///
    /// 输入首尾空白会被去掉；空输入不发送。
    pub async fn send_chat(&mut self, input: &str) -> ConsoleResult<ChatOutcome> {
        let message = input.trim();
        if message.is_empty() {
            return Ok(ChatOutcome::Ignored);
        }
        let session = self.session.as_mut().ok_or(ConsoleError::NoActiveSession)?;

        session.push(ChatMessage::user(message));
        let response = self.backend.chat_response(&session.chat_request()).await?;
        let action = response.action();
        session.push(ChatMessage::bot(response.bot_response));

        let Some(resolution) = session.apply(&action) else {
            if let ChatAction::Unrecognized(raw) = &action {
                tracing::warn!(session_id = %session.id(), action = %raw, "unrecognized chat action, waiting for user input");
            }
            return Ok(ChatOutcome::Pending(action));
        };

        self.backend.add_entry(session.entry()).await?;
        tracing::info!(
            session_id = %session.id(),
            vessel = %session.entry().vessel_name,
            resolution = ?resolution,
            "contradiction resolved"
        );

        self.latest_vessel = Some(session.entry().vessel_name.clone());
        self.session = None;
        self.form.reset();
        Ok(ChatOutcome::Resolved(resolution.into()))
    }

    /// 放弃当前会话（不保存，表单保留以便修改后重新提交）
    pub fn abandon_session(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                tracing::info!(session_id = %session.id(), "contradiction session abandoned");
                true
            }
            None => false,
        }
    }
}
