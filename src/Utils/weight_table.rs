/*
Plain-text tables of the scale: item counts on both pans and the unit weight panel.
Used by the interactive example and for logging.
*/
use crate::balance::engine::Snapshot;
use crate::balance::ledger::Side;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, PartialEq, Tabled)]
pub struct CountRow {
    item: String,
    left: i64,
    right: i64,
}

#[derive(Debug, PartialEq, Tabled)]
pub struct WeightRow {
    item: String,
    #[tabled(rename = "unit weight")]
    weight: String,
}

pub fn count_rows(snapshot: &Snapshot) -> Vec<CountRow> {
    snapshot
        .counts(Side::Left)
        .iter()
        .map(|(item, left)| CountRow {
            item: item.clone(),
            left: *left,
            right: snapshot.count(Side::Right, item).unwrap_or(0),
        })
        .collect()
}

/// only what the weight panel is allowed to show
pub fn weight_rows(snapshot: &Snapshot) -> Vec<WeightRow> {
    snapshot
        .visible_weights
        .iter()
        .map(|(item, w)| WeightRow {
            item: item.clone(),
            weight: w.to_string(),
        })
        .collect()
}

pub fn render_counts(snapshot: &Snapshot) -> String {
    let mut table = Table::new(count_rows(snapshot));
    table.with(Style::modern_rounded());
    table.to_string()
}

pub fn render_weights(snapshot: &Snapshot) -> String {
    let mut table = Table::new(weight_rows(snapshot));
    table.with(Style::modern_rounded());
    table.to_string()
}

/// counts, totals, balance state and (if revealed) the weights
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut out = format!("equation: {:?}\n", snapshot.equation_text);
    out.push_str(&render_counts(snapshot));
    out.push_str(&format!(
        "\nleft = {}, right = {}: {}\n",
        snapshot.weighing.left_total,
        snapshot.weighing.right_total,
        snapshot.state()
    ));
    if !snapshot.visible_weights.is_empty() {
        out.push_str(&render_weights(snapshot));
        out.push('\n');
    }
    out.push_str(&format!("[{}]\n", snapshot.reveal_label()));
    out
}
