//! Model asset allocations by risk profile.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Investor risk profile, numbered 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskProfile {
    /// 1: capital preservation.
    Conservative,
    /// 2: growth with stability.
    Balanced,
    /// 3: growth-leaning.
    Dynamic,
    /// 4: maximum growth.
    Aggressive,
}

impl RiskProfile {
    /// All profiles in ascending order of risk.
    pub const ALL: [Self; 4] = [
        Self::Conservative,
        Self::Balanced,
        Self::Dynamic,
        Self::Aggressive,
    ];

    /// Numeric level of this profile.
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Self::Conservative => 1,
            Self::Balanced => 2,
            Self::Dynamic => 3,
            Self::Aggressive => 4,
        }
    }
}

impl TryFrom<u8> for RiskProfile {
    type Error = PortfolioError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Conservative),
            2 => Ok(Self::Balanced),
            3 => Ok(Self::Dynamic),
            4 => Ok(Self::Aggressive),
            _ => Err(PortfolioError::InvalidRiskProfile { value }),
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Conservative => "Conservative",
            Self::Balanced => "Balanced",
            Self::Dynamic => "Dynamic",
            Self::Aggressive => "Aggressive",
        };
        f.write_str(name)
    }
}

/// Target split between stocks, bonds and cash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationProfile {
    /// The profile this split belongs to.
    pub profile_type: RiskProfile,
    /// Percent in stocks.
    pub stocks: u8,
    /// Percent in bonds.
    pub bonds: u8,
    /// Percent in cash.
    pub cash: u8,
    /// Who the split suits.
    pub explanation: &'static str,
    /// Example stocks that fit the profile.
    pub suggestions: &'static [StockSuggestion],
}

/// An example stock for a risk profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockSuggestion {
    /// Ticker symbol.
    pub symbol: &'static str,
    /// Company or fund name.
    pub name: &'static str,
    /// Sector label as shown to the user.
    pub sector: &'static str,
    /// Why it fits the profile.
    pub reason: &'static str,
}

const fn suggestion(
    symbol: &'static str,
    name: &'static str,
    sector: &'static str,
    reason: &'static str,
) -> StockSuggestion {
    StockSuggestion {
        symbol,
        name,
        sector,
        reason,
    }
}

const CONSERVATIVE_STOCKS: &[StockSuggestion] = &[
    suggestion(
        "MSFT",
        "Microsoft Corporation",
        "Technology",
        "Recurring revenue from Azure and Office 365 with quarterly dividends. \
         Steady growth with exceptional stability.",
    ),
    suggestion(
        "JNJ",
        "Johnson & Johnson",
        "Healthcare",
        "Healthcare leader with over 60 years of continuous dividend growth. \
         Keeps volatility low while holding defensive exposure.",
    ),
    suggestion(
        "PG",
        "Procter & Gamble",
        "Consumer Defensive",
        "Consumer staples giant that holds up in every economic cycle. \
         Reliable income with low volatility.",
    ),
    suggestion(
        "KO",
        "Coca-Cola Company",
        "Beverages",
        "Iconic brand with a global distribution network. \
         A dependable dividend payer for capital preservation.",
    ),
];

const BALANCED_STOCKS: &[StockSuggestion] = &[
    suggestion(
        "AAPL",
        "Apple Inc.",
        "Technology",
        "Large cash reserve with consistent buybacks and dividends. \
         Balances safety with capital appreciation.",
    ),
    suggestion(
        "V",
        "Visa Inc.",
        "Financial Services",
        "Dominant payment processor riding the shift to digital payments. \
         Solid growth with high margins.",
    ),
    suggestion(
        "GOOGL",
        "Alphabet Inc.",
        "Communication Services",
        "Leader in search and digital advertising with strong cloud growth. \
         Growth potential on a stable business model.",
    ),
    suggestion(
        "JPM",
        "JPMorgan Chase & Co.",
        "Financial Services",
        "Largest U.S. bank with a diversified revenue model. \
         Attractive valuation and dividends while participating in economic growth.",
    ),
    suggestion(
        "COST",
        "Costco Wholesale",
        "Consumer Cyclical",
        "Best-in-class retailer with a loyal membership base. \
         Consistent growth that holds up under inflation.",
    ),
];

const DYNAMIC_STOCKS: &[StockSuggestion] = &[
    suggestion(
        "NVDA",
        "NVIDIA Corporation",
        "Technology",
        "Leader in AI computing hardware. \
         Large growth potential as AI adoption spreads across industries.",
    ),
    suggestion(
        "AMD",
        "Advanced Micro Devices",
        "Technology",
        "Strong competitor in data center and consumer chips. \
         High beta exposure to the semiconductor cycle.",
    ),
    suggestion(
        "TSLA",
        "Tesla, Inc.",
        "Consumer Cyclical",
        "Leader in EVs and energy storage. \
         A high-volatility play on the future of transportation and energy.",
    ),
    suggestion(
        "NFLX",
        "Netflix, Inc.",
        "Communication Services",
        "Dominant streaming platform with improving profitability. \
         Growth through global expansion and ad-supported tiers.",
    ),
    suggestion(
        "AMZN",
        "Amazon.com Inc.",
        "Consumer Cyclical",
        "E-commerce and cloud computing giant that reinvests heavily for growth. \
         Suits investors willing to ride out volatility.",
    ),
];

const AGGRESSIVE_STOCKS: &[StockSuggestion] = &[
    suggestion(
        "COIN",
        "Coinbase Global",
        "Financial Services",
        "Leading US crypto exchange. \
         A high-risk proxy for the cryptocurrency market and blockchain adoption.",
    ),
    suggestion(
        "PLTR",
        "Palantir Technologies",
        "Technology",
        "Data analytics firm embedded in government and enterprise defense. \
         Explosive growth potential with significant valuation risk.",
    ),
    suggestion(
        "SHOP",
        "Shopify Inc.",
        "Technology",
        "Infrastructure for global e-commerce. \
         Volatile, with substantial long-term upside.",
    ),
    suggestion(
        "ARKK",
        "ARK Innovation ETF",
        "Fund",
        "Active ETF focused on disruptive innovation. \
         A basket of high-growth, early stage technology companies.",
    ),
    suggestion(
        "MSTR",
        "MicroStrategy",
        "Technology",
        "Enterprise software company that acts as a leveraged play on Bitcoin. \
         Extremely volatile; only for the most aggressive profiles.",
    ),
];

impl RiskProfile {
    /// Example stocks for this profile.
    #[must_use]
    pub fn suggestions(self) -> &'static [StockSuggestion] {
        match self {
            Self::Conservative => CONSERVATIVE_STOCKS,
            Self::Balanced => BALANCED_STOCKS,
            Self::Dynamic => DYNAMIC_STOCKS,
            Self::Aggressive => AGGRESSIVE_STOCKS,
        }
    }
}

impl From<RiskProfile> for AllocationProfile {
    fn from(profile: RiskProfile) -> Self {
        let (stocks, bonds, cash, explanation) = match profile {
            RiskProfile::Conservative => (
                20,
                60,
                20,
                "A conservative portfolio focuses on capital preservation and income. \
                 It works best for investors with a low tolerance for risk or those approaching retirement.",
            ),
            RiskProfile::Balanced => (
                50,
                35,
                15,
                "A balanced portfolio is suitable for investors with moderate risk tolerance. \
                 It combines growth potential with stability.",
            ),
            RiskProfile::Dynamic => (
                70,
                20,
                10,
                "A dynamic portfolio leans towards growth, making it suitable for investors \
                 with a longer time horizon and some tolerance for market volatility.",
            ),
            RiskProfile::Aggressive => (
                90,
                5,
                5,
                "An aggressive portfolio maximizes growth potential through high exposure to stocks. \
                 It is designed for investors with a high risk tolerance and a long investment horizon.",
            ),
        };
        Self {
            profile_type: profile,
            stocks,
            bonds,
            cash,
            explanation,
            suggestions: profile.suggestions(),
        }
    }
}

/// Returns the model allocation for a numeric risk profile.
///
/// # Errors
///
/// Returns [`PortfolioError::InvalidRiskProfile`] outside `1..=4`.
pub fn allocation_for_profile(level: u8) -> PortfolioResult<AllocationProfile> {
    RiskProfile::try_from(level).map(AllocationProfile::from)
}

/// Returns the example stocks for a numeric risk profile.
///
/// # Errors
///
/// Returns [`PortfolioError::InvalidRiskProfile`] outside `1..=4`.
pub fn suggestions_for_profile(level: u8) -> PortfolioResult<&'static [StockSuggestion]> {
    RiskProfile::try_from(level).map(RiskProfile::suggestions)
}
