use rust_decimal::{Decimal, RoundingStrategy};

use crate::{FundProfile, ResolvedFund};

/// Fractional digits used when presenting NAV.
pub const NAV_DISPLAY_DP: u32 = 4;

/// Estimated net asset value per share: `market_cap / shares_outstanding`.
///
/// Returns `None` when either input is absent or the share count is zero.
/// The quotient keeps full precision; see [`nav_for_display`] for rounding.
#[must_use]
pub fn estimate_nav(market_cap: Option<u64>, shares_outstanding: Option<u64>) -> Option<Decimal> {
    let cap = market_cap?;
    let shares = shares_outstanding.filter(|s| *s > 0)?;
    Decimal::from(cap).checked_div(Decimal::from(shares))
}

/// Round a NAV to [`NAV_DISPLAY_DP`] places (half away from zero).
#[must_use]
pub fn nav_for_display(nav: Decimal) -> Decimal {
    let mut out =
        nav.round_dp_with_strategy(NAV_DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero);
    out.rescale(NAV_DISPLAY_DP);
    out
}

/// Attach derived metrics to a profile.
#[must_use]
pub fn resolve_fund(profile: FundProfile) -> ResolvedFund {
    let nav = estimate_nav(profile.market_cap, profile.usable_shares());
    ResolvedFund { profile, nav }
}
