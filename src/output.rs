//! Text, JSON and CSV rendering of edit distance reports

use crate::report::EditDistanceReport;

/// Escape CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Pretty-printed JSON array of reports
pub fn render_json(reports: &[EditDistanceReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

/// One CSV row per operation, prefixed by the pair it belongs to
pub fn render_csv(reports: &[EditDistanceReport]) -> String {
    let mut out = String::from("event,idx,value,entry,operation,index,info\n");

    for report in reports {
        let event = report.execution_event.as_deref().unwrap_or("");
        let idx = report.idx.map(|i| i.to_string()).unwrap_or_default();

        for record in &report.op {
            let fields = [
                escape_field(event),
                idx.clone(),
                report.value.to_string(),
                record.entry.to_string(),
                record.operation.to_string(),
                record.index.to_string(),
                escape_field(&record.info),
            ];
            out.push_str(&fields.join(","));
            out.push('\n');
        }
    }

    out
}

/// Human-readable tables, one block per report
pub fn render_text(reports: &[EditDistanceReport]) -> String {
    let mut out = String::new();

    if reports.is_empty() {
        out.push_str("No differences found\n");
        return out;
    }

    for report in reports {
        if let (Some(event), Some(idx)) = (&report.execution_event, report.idx) {
            out.push_str(&format!("Execution Event: {} idx: {}\n", event, idx));
        }
        out.push_str(&format!("Edit Distance: {}\n", report.value));

        if report.op.is_empty() {
            out.push('\n');
            continue;
        }

        out.push_str(&format!(
            "{:>5}  {:<9}  {:>5}  Info\n",
            "Entry", "Operation", "Index"
        ));
        out.push_str("─────────────────────────────────────────\n");
        for record in &report.op {
            out.push_str(&format!(
                "{:>5}  {:<9}  {:>5}  {}\n",
                record.entry, record.operation, record.index, record.info
            ));
        }
        out.push('\n');
    }

    out
}
