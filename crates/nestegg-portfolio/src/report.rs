//! Markdown narrative built from a [`PortfolioSnapshot`].

use std::fmt::Write as _;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::analytics::{ConcentrationRisk, PortfolioSnapshot};
use crate::types::AnalyticsConfig;

/// Score at or above which diversification is rated excellent.
pub const EXCELLENT_SCORE: u8 = 70;

/// Score at or above which diversification is rated moderate.
pub const MODERATE_SCORE: u8 = 50;

/// Options for [`render_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Holdings listed under "Top Holdings".
    pub top_holdings: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { top_holdings: 3 }
    }
}

impl From<&AnalyticsConfig> for ReportOptions {
    fn from(config: &AnalyticsConfig) -> Self {
        Self {
            top_holdings: config.report_top_holdings,
        }
    }
}

/// Formats a currency amount as `$1,234.56` (or `-$1,234.56`).
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

/// Renders the narrative report.
#[must_use]
pub fn render_report(snapshot: &PortfolioSnapshot, options: &ReportOptions) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, snapshot, options);
    out
}

fn write_report(
    out: &mut String,
    snap: &PortfolioSnapshot,
    options: &ReportOptions,
) -> std::fmt::Result {
    writeln!(out, "## Portfolio Analysis Report\n")?;
    writeln!(out, "{}.\n", snap.summary)?;

    writeln!(out, "### Performance Overview\n")?;
    if snap.total_gain >= Decimal::ZERO {
        write!(
            out,
            "Your portfolio shows a total gain of **{}** ({:+.2}%). ",
            format_currency(snap.total_gain),
            snap.total_gain_percent
        )?;
        if snap.total_gain_percent > 15.0 {
            write!(out, "This is an excellent return that outpaces many market benchmarks. ")?;
        } else if snap.total_gain_percent > 5.0 {
            write!(out, "This represents solid growth aligned with long-term market averages. ")?;
        }
    } else {
        write!(
            out,
            "Your portfolio is currently showing an unrealized loss of **{}** ({:.2}%). ",
            format_currency(snap.total_gain.abs()),
            snap.total_gain_percent
        )?;
        write!(
            out,
            "Market fluctuations are normal - stay focused on your long-term investment goals. "
        )?;
    }
    writeln!(
        out,
        "\n\nYou've invested a total of **{}** across **{} positions**.\n",
        format_currency(snap.total_invested),
        snap.assets.len()
    )?;

    writeln!(out, "### Top Holdings\n")?;
    for (rank, asset) in snap.assets.iter().take(options.top_holdings).enumerate() {
        let sign = if asset.profit_loss >= Decimal::ZERO { "+" } else { "" };
        writeln!(
            out,
            "{}. **{}** - {:.1}% of portfolio ({}{:.1}%)",
            rank + 1,
            asset.symbol,
            asset.weight,
            sign,
            asset.profit_loss_percent
        )?;
    }

    writeln!(out, "\n### Sector Breakdown\n")?;
    if let [only] = snap.sectors.as_slice() {
        writeln!(
            out,
            "Your portfolio is concentrated in a single sector: **{}**. \
             Consider diversifying across multiple sectors.",
            only.sector
        )?;
    } else {
        writeln!(out, "Your investments are spread across **{} sectors**:\n", snap.sectors.len())?;
        for sector in &snap.sectors {
            writeln!(
                out,
                "- **{}**: {:.1}% {}",
                sector.sector,
                sector.weight,
                weight_bar(sector.weight)
            )?;
        }
    }

    writeln!(out, "\n### Risk Assessment\n")?;
    let score = snap.risk_metrics.diversification_score;
    let (label, detail) = if score >= EXCELLENT_SCORE {
        ("Excellent!", "Your portfolio demonstrates good diversification principles.")
    } else if score >= MODERATE_SCORE {
        ("Moderate.", "There's room for improvement in portfolio diversification.")
    } else {
        ("Needs Attention.", "Your portfolio has significant concentration risk.")
    };
    writeln!(out, "**Diversification Score: {score}/100** - {label} {detail}")?;

    if snap.risk_metrics.concentration_risk == ConcentrationRisk::High {
        writeln!(
            out,
            "\n**Concentration Warning**: Your top holding represents {:.1}% of your portfolio. \
             A sudden drop in this position could significantly impact your overall returns.",
            snap.risk_metrics.top_holding_weight
        )?;
    }

    if !snap.recommendations.is_empty() {
        writeln!(out, "\n### Recommendations\n")?;
        for rec in &snap.recommendations {
            writeln!(out, "- {rec}")?;
        }
    }

    writeln!(out, "\n### Summary\n")?;
    writeln!(
        out,
        "Regular portfolio reviews and rebalancing are key to long-term success. \
         Consider your risk tolerance and investment timeline when making decisions."
    )
}

/// One block per full 5% of weight.
fn weight_bar(weight: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let blocks = (weight.max(0.0) / 5.0).floor() as usize;
    "█".repeat(blocks)
}
