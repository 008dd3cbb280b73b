use coldleads_core::{AppViewModel, LeadPanelView, StatusKind};

use super::constants::*;

/// Console lines for one full redraw of the screen.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![rule(APP_TITLE)];

    let input = if view.input.is_empty() {
        INPUT_PLACEHOLDER
    } else {
        view.input.as_str()
    };
    lines.push(format!("{LABEL_INPUT}: {input}"));

    match view.status {
        StatusKind::Loading => {
            let target = view.pending_url.as_deref().unwrap_or_default();
            lines.push(format!("[{}] {target}", view.submit_label()));
        }
        StatusKind::Idle | StatusKind::Success | StatusKind::Failed => {
            lines.push(format!("[{}] type a URL and press Enter", view.submit_label()));
        }
    }

    if let Some(message) = &view.error_banner {
        lines.push(format!("! {message}"));
    }

    if let Some(lead) = &view.lead {
        lines.extend(render_lead(lead));
    }

    lines
}

fn render_lead(lead: &LeadPanelView) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        rule(LABEL_SUMMARY),
        format!("{LABEL_IDENTITY}: {}", lead.role_label),
        format!("{LABEL_PULSE}: {}", lead.company_pulse),
    ];

    if lead.actions_enabled {
        lines.push(format!(
            "{LABEL_EMAIL}   [{CMD_COPY}] {}   [{CMD_COMPOSE}] {LABEL_COMPOSE}",
            lead.copy_label
        ));
    } else {
        lines.push(LABEL_EMAIL.to_string());
    }
    lines.extend(lead.email_draft.lines().map(|line| format!("  {line}")));
    lines.push("-".repeat(RULE_WIDTH));
    lines
}

pub fn render_help() -> Vec<String> {
    vec![
        APP_TITLE.to_string(),
        TAGLINE.to_string(),
        String::new(),
        "  <url>       generate a lead for the company at <url>".to_string(),
        format!("  {CMD_COPY:<11} copy the email draft to the clipboard"),
        format!("  {CMD_COMPOSE:<11} open the draft in Gmail"),
        format!("  {CMD_HELP:<11} show this help"),
        format!("  {CMD_QUIT:<11} exit"),
    ]
}

fn rule(title: &str) -> String {
    let title = format!("── {title} ");
    let used = title.chars().count();
    format!("{title}{}", "─".repeat(RULE_WIDTH.saturating_sub(used)))
}
