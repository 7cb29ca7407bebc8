// 5.0 report.rs: plain-text rendering of a run. fixed-width table plus the
// summary metric block. formatting only: nothing here feeds back into the engine.

use rust_decimal::Decimal;

use crate::record::{PeriodRecord, RunSummary};

// 5.1: comma-grouped dollar string rounded to `dp` decimal places.
pub fn format_usd(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp(dp);
    let raw = rounded.abs().to_string();
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}${grouped}.{f}"),
        None => format!("{sign}${grouped}"),
    }
}

fn format_count(value: Decimal) -> String {
    // token counts render without the dollar sign
    format_usd(value, 0).replace('$', "")
}

// 5.2: the monthly table. columns mirror the record fields.
pub fn render_table(records: &[PeriodRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>5}  {:>16}  {:>14}  {:>12}  {:>10}  {:>16}  {:>16}  {:>12}  {:>14}  {:>14}\n",
        "Month",
        "Total AUM",
        "New AUM",
        "Revenue",
        "Price",
        "Supply",
        "TTV",
        "Burned",
        "Depth",
        "Portfolio",
    ));

    for r in records {
        out.push_str(&format!(
            "{:>5}  {:>16}  {:>14}  {:>12}  {:>10}  {:>16}  {:>16}  {:>12}  {:>14}  {:>14}\n",
            r.month,
            format_usd(r.cumulative_aum.value(), 0),
            format_usd(r.new_aum.value(), 0),
            format_usd(r.revenue.value(), 0),
            format_usd(r.token_price.value(), 4),
            format_count(r.supply.value()),
            format_usd(r.total_token_value.value(), 0),
            format_count(r.tokens_burned.value()),
            format_usd(r.market_depth.value(), 0),
            format_usd(r.portfolio_value.value(), 0),
        ));
    }

    out
}

// 5.3: the four headline metrics.
pub fn render_summary(summary: &RunSummary) -> String {
    format!(
        "  Final token price:   {}\n  Ending supply:       {}\n  Portfolio start:     {}\n  Portfolio end:       {} ({}{}%)\n",
        format_usd(summary.final_price.value(), 4),
        format_count(summary.ending_supply.value()),
        format_usd(summary.starting_portfolio_value.value(), 0),
        format_usd(summary.ending_portfolio_value.value(), 0),
        if summary.roi_pct >= Decimal::ZERO { "+" } else { "" },
        summary.roi_pct.round_dp(0),
    )
}
