use serde::Serialize;
use serde_json::Value;

use samarth_core::Outcome;
use samarth_core::results::{DistrictExtremes, RainfallComparison, StateSummary, TrendCorrelation};

use crate::cli::OutputFormat;
use crate::pipeline::{Answer, AnswerResult};

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render an answer; the table format gets a layout per result kind.
pub fn render_answer(answer: &Answer, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(answer, format);
    }
    let mut sections = vec![format!("intent: {}", answer.plan.kind())];
    if let Some(years) = &answer.years {
        sections.push(format!("years: {}", year_span(years)));
    }
    sections.push(match &answer.result {
        AnswerResult::Comparison(outcome) => outcome_text(outcome, comparison_text),
        AnswerResult::DistrictExtremes(outcome) => outcome_text(outcome, district_text),
        AnswerResult::Trend(outcome) => outcome_text(outcome, trend_text),
        AnswerResult::Unknown { examples, .. } => {
            let mut lines = vec![String::from("question not understood; try:")];
            lines.extend(examples.iter().map(|example| format!("  {example}")));
            lines.join("\n")
        }
        AnswerResult::InvalidQuestion { error } => format!("invalid question: {error}"),
    });
    Ok(sections.join("\n"))
}

pub fn output_answer(answer: &Answer, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_answer(answer, format)?;
    println!("{rendered}");
    Ok(())
}

fn outcome_text<T>(outcome: &Outcome<T>, ready: fn(&T) -> String) -> String {
    match outcome {
        Outcome::Ready { result } => ready(result),
        Outcome::NoData { reason } => format!("no data: {reason}"),
        Outcome::InvalidInput { error } => format!("invalid input: {error}"),
    }
}

fn comparison_text(result: &RainfallComparison) -> String {
    let rainfall = table::render_table(
        &["state", "mean rainfall (mm)", "years observed"],
        &[state_row(&result.state_x), state_row(&result.state_y)],
    );
    let mut sections = vec![rainfall];
    for state in [&result.state_x, &result.state_y] {
        let rows = state
            .top_crops
            .iter()
            .enumerate()
            .map(|(rank, crop)| {
                vec![
                    (rank + 1).to_string(),
                    crop.crop_id.clone(),
                    number(crop.production_tonnes),
                ]
            })
            .collect::<Vec<_>>();
        sections.push(format!("top {} crops in {}", result.top_m, state.state_code));
        sections.push(if rows.is_empty() {
            String::from("(no rows)")
        } else {
            table::render_table(&["rank", "crop", "tonnes"], &rows)
        });
    }
    sections.push(provenance_text(
        &[
            ("rainfall", result.rainfall_provenance.len()),
            ("crop", result.crop_provenance.len()),
        ],
        result
            .rainfall_provenance
            .iter()
            .map(|row| row.source_url.as_str())
            .chain(result.crop_provenance.iter().map(|row| row.source_url.as_str())),
    ));
    sections.join("\n")
}

fn state_row(state: &StateSummary) -> Vec<String> {
    vec![
        state.state_code.clone(),
        state
            .mean_annual_rainfall_mm
            .map_or_else(|| String::from("-"), number),
        state.rainfall_years_observed.to_string(),
    ]
}

fn district_text(result: &DistrictExtremes) -> String {
    let rows = result
        .districts
        .iter()
        .map(|total| vec![total.district.clone(), number(total.production_tonnes)])
        .collect::<Vec<_>>();
    [
        format!("{} {} production in {}", result.state, result.crop, result.max_year),
        table::render_table(&["district", "tonnes"], &rows),
        format!(
            "highest: {} ({})",
            result.highest.district,
            number(result.highest.production_tonnes)
        ),
        format!(
            "lowest: {} ({})",
            result.lowest.district,
            number(result.lowest.production_tonnes)
        ),
        provenance_text(
            &[("raw crop", result.provenance.len())],
            result.provenance.iter().map(|row| row.source_url.as_str()),
        ),
    ]
    .join("\n")
}

fn trend_text(result: &TrendCorrelation) -> String {
    let rows = result
        .production
        .iter()
        .zip(&result.rainfall)
        .map(|(production, rainfall)| {
            vec![
                production.year.to_string(),
                number(production.value),
                number(rainfall.value),
            ]
        })
        .collect::<Vec<_>>();
    let mut lines = vec![
        format!("{} in {}", result.crop_id, result.state_code),
        table::render_table(&["year", "production (t)", "rainfall (mm)"], &rows),
    ];
    match result.trend {
        Some(trend) => lines.push(format!(
            "trend: slope {:.4} t/yr, intercept {:.4}, r^2 {:.4}, p {:.4}",
            trend.slope, trend.intercept, trend.r_squared, trend.p_value
        )),
        None => lines.push(String::from("trend: undefined (fewer than two years)")),
    }
    match result.correlation {
        Some(r) => lines.push(format!("correlation with rainfall: {r:.4}")),
        None => lines.push(String::from("correlation with rainfall: undefined")),
    }
    lines.push(provenance_text(
        &[
            ("production", result.production_provenance.len()),
            ("rainfall", result.rainfall_provenance.len()),
        ],
        result
            .production_provenance
            .iter()
            .map(|row| row.source_url.as_str())
            .chain(result.rainfall_provenance.iter().map(|row| row.source_url.as_str())),
    ));
    lines.join("\n")
}

/// Row counts per relation, then each distinct source once, in first-seen order.
fn provenance_text<'a>(counts: &[(&str, usize)], sources: impl Iterator<Item = &'a str>) -> String {
    let counts = counts
        .iter()
        .map(|(relation, rows)| format!("{rows} {relation} rows"))
        .collect::<Vec<_>>()
        .join(", ");
    let mut lines = vec![format!("provenance: {counts}")];
    let mut seen = Vec::<&str>::new();
    for source in sources {
        if !source.is_empty() && !seen.contains(&source) {
            seen.push(source);
        }
    }
    if seen.is_empty() {
        lines.push(String::from("sources: none"));
    } else {
        lines.push(String::from("sources:"));
        lines.extend(seen.iter().map(|source| format!("  {source}")));
    }
    lines.join("\n")
}

fn number(value: f64) -> String {
    format!("{value:.2}")
}

fn year_span(years: &[i32]) -> String {
    match (years.first(), years.last()) {
        (Some(first), Some(last)) if first != last => format!("{first}-{last}"),
        (Some(only), _) => only.to_string(),
        _ => String::from("-"),
    }
}

fn render_value_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows))
        }
        scalar => Ok(table::render_table(&["value"], &[vec![value_to_cell(&scalar)]])),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_table(&header_refs, &rows)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
