//! Pure renderers for navigation reports. Writing the output anywhere is the
//! host's job.

use crate::domain::graph::GraphNode;
use crate::domain::path::PathStatus;
use crate::domain::report::NavigationReport;

/// Short label for a node: `(x,y)`, `issue-<id>` or `terminal`.
pub fn describe_node(node: &GraphNode) -> String {
    node.id.to_string()
}

/// Route as `a -> b -> c`, or `unreachable`.
pub fn describe_path(report: &NavigationReport) -> String {
    match report.path.status {
        PathStatus::Found => report
            .path
            .nodes
            .iter()
            .map(describe_node)
            .collect::<Vec<_>>()
            .join(" -> "),
        PathStatus::Unreachable => "unreachable".to_string(),
    }
}

/// Quest lines: the route first, then one line per boss battle.
pub fn render_quests(report: &NavigationReport) -> Vec<String> {
    let mut quests = Vec::with_capacity(report.boss_battles.len() + 1);
    match report.path.status {
        PathStatus::Found => quests.push(format!(
            "Follow {} to earn {} XP",
            describe_path(report),
            report.score
        )),
        PathStatus::Unreachable => quests.push(format!(
            "No route through the labyrinth; {} XP from boss battles only",
            report.score
        )),
    }
    for boss in &report.boss_battles {
        quests.push(format!(
            "Defeat {} for {} XP",
            boss.issue.text, boss.reward
        ));
    }
    quests
}

/// Markdown summary for PR comments or terminals.
pub fn render_report_md(report: &NavigationReport) -> String {
    let mut out = String::new();
    out.push_str("# Labyrinth Report\n\n");

    out.push_str("## Route\n");
    let status = match report.path.status {
        PathStatus::Found => "found",
        PathStatus::Unreachable => "unreachable",
    };
    out.push_str(&format!(
        "- status: {}\n- total cost: {}\n- length: {}\n- expanded: {}\n",
        status,
        report.path.total_cost,
        report.path.len(),
        report.path.expanded
    ));
    if report.path.is_found() {
        out.push_str(&format!("- path: `{}`\n", describe_path(report)));
    }
    out.push('\n');

    out.push_str(&format!("## Issues ({})\n", report.issues.len()));
    for issue in &report.issues {
        match &issue.source_hint {
            Some(hint) => out.push_str(&format!(
                "- #{} [{}] {} _({})_\n",
                issue.id, issue.severity, issue.text, hint
            )),
            None => out.push_str(&format!(
                "- #{} [{}] {}\n",
                issue.id, issue.severity, issue.text
            )),
        }
    }
    out.push('\n');

    if !report.boss_battles.is_empty() {
        out.push_str("## Boss Battles\n");
        for boss in &report.boss_battles {
            out.push_str(&format!(
                "- #{} {} ({} XP)\n",
                boss.issue.id, boss.issue.text, boss.reward
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!("**Score:** {}\n", report.score));
    out
}
