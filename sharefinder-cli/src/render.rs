use std::fmt::Write as _;

use rust_decimal::{Decimal, RoundingStrategy};
use sharefinder_core::{LookupOutcome, LookupReport, ResolvedFund, Symbol, nav_for_display};

/// Heading printed above language-model text.
pub const ESTIMATE_HEADING: &str = "ChatGPT Estimate";
/// Printed when a structured record has no share count.
pub const NO_SHARES: &str = "Shares Outstanding not available from any source.";
/// Printed when every source came back empty.
pub const NOT_FOUND: &str = "No data found from any source.";

/// Group an integer's digits in threes: `1234567` → `1,234,567`.
#[must_use]
pub fn thousands(n: u64) -> String {
    group_digits(&n.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a positive decimal as dollars with `dp` fractional digits and
/// grouped thousands.
#[must_use]
pub fn dollars(value: Decimal, dp: u32) -> String {
    let mut v = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    v.rescale(dp);
    let text = v.to_string();
    match text.split_once('.') {
        Some((int, frac)) => format!("${}.{frac}", group_digits(int)),
        None => format!("${}", group_digits(&text)),
    }
}

/// Search link shown when no official page is known.
#[must_use]
pub fn search_link(symbol: &Symbol) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", &format!("{symbol} fund"))
        .finish();
    format!("https://www.google.com/search?{query}")
}

fn fund_lines(out: &mut String, symbol: &Symbol, fund: &ResolvedFund) {
    let p = &fund.profile;
    let _ = writeln!(out, "Fund: {} ({symbol})", p.name);
    let _ = writeln!(out, "Data Source: {}", p.source);
    match p.usable_shares() {
        Some(n) => {
            let _ = writeln!(out, "Shares Outstanding: {}", thousands(n));
        }
        None => {
            let _ = writeln!(out, "{NO_SHARES}");
        }
    }
    if let Some(cap) = p.market_cap {
        let _ = writeln!(out, "Market Cap: ${}", thousands(cap));
    }
    if let Some(price) = p.price_per_share {
        let _ = writeln!(out, "Price per Share: {}", dollars(price, 2));
    }
    if let Some(nav) = fund.nav {
        let _ = writeln!(out, "Estimated NAV: {}", dollars(nav_for_display(nav), 4));
    }
    match &p.website {
        Some(site) => {
            let _ = writeln!(out, "Official Fund Page: {site}");
        }
        None => {
            let _ = writeln!(out, "Search: {}", search_link(symbol));
        }
    }
}

fn estimate_lines(out: &mut String, text: &str) {
    let _ = writeln!(out, "{ESTIMATE_HEADING}");
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
}

/// Human-readable rendering of a report.
#[must_use]
pub fn text(report: &LookupReport) -> String {
    let mut out = String::new();
    match &report.outcome {
        LookupOutcome::Resolved(fund) => fund_lines(&mut out, &report.symbol, fund),
        LookupOutcome::Partial { fund, estimate } => {
            fund_lines(&mut out, &report.symbol, fund);
            if let Some(text) = estimate {
                out.push('\n');
                estimate_lines(&mut out, text);
            }
        }
        LookupOutcome::Estimated { text } => estimate_lines(&mut out, text),
        LookupOutcome::NotFound => {
            let _ = writeln!(out, "{NOT_FOUND}");
        }
    }
    out
}

/// JSON rendering of the full report.
///
/// # Errors
/// Returns the serializer error, which only happens on a broken `Serialize` impl.
pub fn json(report: &LookupReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
