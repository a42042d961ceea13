// ==========================================
// 船舶正午报告控制台 - 数据表渲染
// ==========================================
// 职责: 将报告条目渲染为文本表格或 HTML 表格
// 红线: 纯函数，每次状态变化全量重渲染；空数据输出占位文案而非表格
// ==========================================

use std::fmt::Write as _;

use crate::domain::ReportEntry;
use crate::i18n::t;

fn header_labels() -> [String; 4] {
    [
        t("table.vessel"),
        t("table.date"),
        t("table.laden_ballast"),
        t("table.report_type"),
    ]
}

fn row_cells(entry: &ReportEntry) -> [String; 4] {
    [
        entry.vessel_name.clone(),
        entry.date_label(),
        entry.laden_ballast.clone(),
        entry.report_type.clone(),
    ]
}

/// 渲染为终端文本表格
pub fn render_table_text(rows: &[ReportEntry]) -> String {
    if rows.is_empty() {
        return t("table.empty");
    }

    let headers = header_labels();
    let cells: Vec<[String; 4]> = rows.iter().map(row_cells).collect();

    let mut widths = headers.clone().map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_text_row(&mut out, &headers, &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(separator.join("-+-").as_str());
    out.push('\n');
    for row in &cells {
        push_text_row(&mut out, row, &widths);
    }
    out
}

fn push_text_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

/// 渲染为 HTML 片段（单元格内容统一转义）
pub fn render_table_html(rows: &[ReportEntry]) -> String {
    if rows.is_empty() {
        return format!("<em>{}</em>", v_htmlescape::escape(&t("table.empty")));
    }

    let mut html = String::from("<table class=\"table table-bordered\"><thead><tr>");
    for label in header_labels() {
        let _ = write!(html, "<th>{}</th>", v_htmlescape::escape(&label));
    }
    html.push_str("</tr></thead><tbody>");
    for entry in rows {
        html.push_str("<tr>");
        for cell in row_cells(entry) {
            let _ = write!(html, "<td>{}</td>", v_htmlescape::escape(&cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}
