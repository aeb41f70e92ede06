//! Income normalisation
//!
//! Every income figure shown to the user is a monthly amount. Weekly and
//! yearly sources are converted with [`monthly_equivalent`], which is the only
//! place the conversion factors live.

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Frequency, IncomeId, IncomeSource, Money, NewIncomeSource};

/// Weeks per month used for weekly income, as the ratio 433/100 (4.33).
///
/// The calendar value is 365 / 12 / 7 = 4.345…; the tracker has always
/// multiplied by the rounded 4.33 and totals are kept comparable with that
/// history. This is an approximation, not a physical constant.
pub const WEEKS_PER_MONTH: (i64, i64) = (433, 100);

/// Months per year used for yearly income
pub const MONTHS_PER_YEAR: i64 = 12;

/// Convert an amount paid at `frequency` to its monthly equivalent
///
/// Results are rounded half away from zero to the cent.
pub fn monthly_equivalent(amount: Money, frequency: Frequency) -> Money {
    match frequency {
        Frequency::Weekly => amount.mul_ratio(WEEKS_PER_MONTH.0, WEEKS_PER_MONTH.1),
        Frequency::Monthly => amount,
        Frequency::Yearly => amount.div_round(MONTHS_PER_YEAR),
    }
}

/// Monthly income from active sources
pub fn total_monthly_income(sources: &[IncomeSource]) -> Money {
    sources
        .iter()
        .filter(|s| s.is_active)
        .map(|s| monthly_equivalent(s.amount, s.frequency))
        .sum()
}

/// Yearly income from active sources (monthly total × 12)
pub fn total_yearly_income(sources: &[IncomeSource]) -> Money {
    total_monthly_income(sources).mul_ratio(MONTHS_PER_YEAR, 1)
}

/// Number of active sources
pub fn active_count(sources: &[IncomeSource]) -> usize {
    sources.iter().filter(|s| s.is_active).count()
}

/// Append a validated source; new sources start active
pub fn add_source(
    sources: &[IncomeSource],
    input: NewIncomeSource,
) -> LedgerResult<(Vec<IncomeSource>, IncomeId)> {
    let frequency = input.validate()?;
    let id = IncomeId::next_after(sources.iter().map(|s| s.id));

    let mut updated = sources.to_vec();
    updated.push(IncomeSource::new(id, input.name.trim(), input.amount, frequency));

    debug!(income_id = %id, %frequency, "added income source");
    Ok((updated, id))
}

/// Replace name, amount and frequency of an existing source
pub fn update_source(
    sources: &[IncomeSource],
    id: IncomeId,
    input: NewIncomeSource,
) -> LedgerResult<Vec<IncomeSource>> {
    let frequency = input.validate()?;

    let mut updated = sources.to_vec();
    let source = updated
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| LedgerError::income_not_found(id))?;
    source.name = input.name.trim().to_string();
    source.amount = input.amount;
    source.frequency = frequency;

    debug!(income_id = %id, "updated income source");
    Ok(updated)
}

/// Flip a source's active flag
pub fn toggle_source(sources: &[IncomeSource], id: IncomeId) -> LedgerResult<Vec<IncomeSource>> {
    let mut updated = sources.to_vec();
    let source = updated
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| LedgerError::income_not_found(id))?;
    source.is_active = !source.is_active;
    Ok(updated)
}

/// Remove a source
pub fn remove_source(sources: &[IncomeSource], id: IncomeId) -> LedgerResult<Vec<IncomeSource>> {
    if !sources.iter().any(|s| s.id == id) {
        return Err(LedgerError::income_not_found(id));
    }
    Ok(sources.iter().filter(|s| s.id != id).cloned().collect())
}
