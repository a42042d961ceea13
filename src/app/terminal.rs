// ==========================================
// 船舶正午报告控制台 - 终端交互
// ==========================================
// 职责: 逐行读取命令，驱动 EntryConsole，并全量重渲染受影响的视图
// 模式:
// - 表单模式: vessel/date/status/type/add/submit/show/form/help/quit
// - 对话模式: 任意输入作为对话消息；cancel 放弃会话；quit 退出
// ==========================================

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::api::backend::NoonReportBackend;
use crate::app::console::{ChatOutcome, DataView, EntryConsole, SubmitOutcome};
use crate::app::error::{ConsoleError, ConsoleResult};
use crate::app::form::{EntryForm, FormField};
use crate::domain::REPORT_TYPES;
use crate::i18n::{t, t_with_args};
use crate::render::{render_chat_text, render_table_text};

/// 表单模式命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FormField, String),
    Add(EntryForm),
    Submit,
    Show,
    Form,
    Help,
    Quit,
    Empty,
    Unknown(String),
    BadAdd,
}

/// 解析表单模式命令
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "vessel" => Command::Set(FormField::VesselName, rest.to_string()),
        "date" => Command::Set(FormField::Date, rest.to_string()),
        "status" => Command::Set(FormField::LadenBallast, rest.to_string()),
        "type" => Command::Set(FormField::ReportType, rest.to_string()),
        "add" => {
            let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
            match parts.as_slice() {
                [vessel, date, status, report_type] => {
                    Command::Add(EntryForm::new(*vessel, *date, *status, *report_type))
                }
                _ => Command::BadAdd,
            }
        }
        "submit" => Command::Submit,
        "show" => Command::Show,
        "form" => Command::Form,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(head.to_string()),
    }
}

/// 运行交互循环，直到输入结束或 quit
pub async fn run<B, R, W>(
    console: &mut EntryConsole<B>,
    mut input: R,
    output: &mut W,
) -> ConsoleResult<()>
where
    B: NoonReportBackend,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if console.options().load_on_start {
        match console.load_initial().await {
            Ok(view) => {
                let text = render_data_view(view);
                write_block(output, &text).await?;
            }
            Err(err) => report_error(output, &err).await?,
        }
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        // 非 UTF-8 字节按替换字符处理，单行坏输入不终止会话
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(&['\n', '\r'][..]);

        let keep_going = if console.is_chat_open() {
            handle_chat_line(console, line, output).await?
        } else {
            handle_form_line(console, line, output).await?
        };
        if !keep_going {
            break;
        }
    }

    write_block(output, &t("console.bye")).await?;
    output.flush().await?;
    Ok(())
}

async fn handle_form_line<B, W>(
    console: &mut EntryConsole<B>,
    line: &str,
    output: &mut W,
) -> ConsoleResult<bool>
where
    B: NoonReportBackend,
    W: AsyncWrite + Unpin,
{
    match parse_command(line) {
        Command::Empty => {}
        Command::Quit => return Ok(false),
        Command::Help => write_block(output, &t("console.help")).await?,
        Command::Form => write_block(output, &render_form(console.form())).await?,
        Command::BadAdd => write_block(output, &t("form.add_usage")).await?,
        Command::Unknown(command) => {
            write_block(
                output,
                &t_with_args("console.unknown_command", &[("command", command.as_str())]),
            )
            .await?
        }
        Command::Set(field, value) => {
            console.form_mut().set(field, value);
            write_block(output, &render_form(console.form())).await?;
        }
        Command::Add(form) => {
            *console.form_mut() = form;
            submit(console, output).await?;
        }
        Command::Submit => submit(console, output).await?,
        Command::Show => match console.toggle_data().await {
            Ok(view) => {
                let text = render_data_view(view);
                write_block(output, &text).await?;
            }
            Err(err) => report_error(output, &err).await?,
        },
    }
    Ok(true)
}

async fn submit<B, W>(console: &mut EntryConsole<B>, output: &mut W) -> ConsoleResult<()>
where
    B: NoonReportBackend,
    W: AsyncWrite + Unpin,
{
    match console.submit_entry().await {
        Ok(SubmitOutcome::Added(notice)) => write_block(output, &notice.message()).await,
        Ok(SubmitOutcome::ContradictionOpened) => {
            write_block(output, &t("console.chat_prompt")).await?;
            write_block(output, &render_chat_text(console.chat_history())).await
        }
        Err(err) => report_error(output, &err).await,
    }
}

async fn handle_chat_line<B, W>(
    console: &mut EntryConsole<B>,
    line: &str,
    output: &mut W,
) -> ConsoleResult<bool>
where
    B: NoonReportBackend,
    W: AsyncWrite + Unpin,
{
    match line.trim() {
        "quit" | "exit" => return Ok(false),
        "cancel" => {
            console.abandon_session();
            write_block(output, &render_form(console.form())).await?;
            return Ok(true);
        }
        _ => {}
    }

    match console.send_chat(line).await {
        Ok(ChatOutcome::Ignored) => {}
        Ok(ChatOutcome::Pending(_)) => {
            write_block(output, &render_chat_text(console.chat_history())).await?
        }
        Ok(ChatOutcome::Resolved(notice)) => write_block(output, &notice.message()).await?,
        Err(err) => {
            // 失败时对话历史保持原样（含已追加的用户消息）
            report_error(output, &err).await?;
            write_block(output, &render_chat_text(console.chat_history())).await?;
        }
    }
    Ok(true)
}

/// 渲染数据表视图
pub fn render_data_view(view: &DataView) -> String {
    match view {
        DataView::Hidden => t("table.hidden"),
        DataView::Shown(rows) => render_table_text(rows),
    }
}

fn render_form(form: &EntryForm) -> String {
    let types = REPORT_TYPES.join(", ");
    format!(
        "[{}]\n{}\n{}",
        t("form.title"),
        form,
        t_with_args("form.report_types", &[("types", types.as_str())])
    )
}

async fn report_error<W>(output: &mut W, err: &ConsoleError) -> ConsoleResult<()>
where
    W: AsyncWrite + Unpin,
{
    let message = match err {
        ConsoleError::InvalidForm(form_err) => form_err.message(),
        ConsoleError::Io(_) | ConsoleError::Api(_) | ConsoleError::NoActiveSession => {
            tracing::error!(error = %err, "console operation failed");
            t_with_args("console.request_failed", &[("error", err.to_string().as_str())])
        }
    };
    write_block(output, &message).await
}

async fn write_block<W>(output: &mut W, text: &str) -> ConsoleResult<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        output.write_all(b"\n").await?;
    }
    output.flush().await?;
    Ok(())
}
