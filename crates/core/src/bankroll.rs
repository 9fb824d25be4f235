use crate::error::{BancaError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named bankroll ("banca") with its own capital and unit size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bankroll {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub initial_capital: Decimal,
    pub unit_value: Decimal,
    #[serde(default)]
    pub owner: String,
    /// Receives every bet that carries no bankroll id.
    #[serde(default)]
    pub is_default: bool,
}

impl Bankroll {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        initial_capital: Decimal,
        unit_value: Decimal,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            initial_capital,
            unit_value,
            owner: String::new(),
            is_default: false,
        }
    }

    #[must_use]
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Returns true when a bet tagged with `bet_bankroll` belongs here.
    ///
    /// Untagged bets (`None`) belong to the default bankroll only.
    #[must_use]
    pub fn owns(&self, bet_bankroll: Option<&str>) -> bool {
        match (bet_bankroll, self.id.as_deref()) {
            (Some(bet_id), Some(own_id)) => bet_id == own_id,
            (None, _) => self.is_default,
            (Some(_), None) => false,
        }
    }
}

/// Picks the active bankroll: the requested id when given, otherwise the one
/// flagged as default.
///
/// # Errors
///
/// Returns [`BancaError::UnknownBankroll`] if `requested` matches nothing and
/// [`BancaError::NoBankroll`] if nothing was requested and no default exists.
pub fn resolve_active<'a>(bankrolls: &'a [Bankroll], requested: Option<&str>) -> Result<&'a Bankroll> {
    match requested {
        Some(id) => bankrolls
            .iter()
            .find(|b| b.id.as_deref() == Some(id))
            .ok_or_else(|| BancaError::unknown_bankroll(id)),
        None => bankrolls
            .iter()
            .find(|b| b.is_default)
            .ok_or(BancaError::NoBankroll),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bankrolls() -> Vec<Bankroll> {
        vec![
            Bankroll::new("main", "Main", dec!(1000), dec!(100)).as_default(),
            Bankroll::new("side", "Side", dec!(500), dec!(25)),
        ]
    }

    #[test]
    fn default_bankroll_owns_untagged_bets() {
        let list = bankrolls();
        assert!(list[0].owns(None));
        assert!(!list[1].owns(None));
    }

    #[test]
    fn bankroll_owns_matching_tag_only() {
        let list = bankrolls();
        assert!(list[0].owns(Some("main")));
        assert!(!list[0].owns(Some("side")));
        assert!(list[1].owns(Some("side")));
    }

    #[test]
    fn bankroll_without_id_owns_no_tagged_bets() {
        let mut anonymous = Bankroll::new("x", "Anon", dec!(1), dec!(1));
        anonymous.id = None;
        assert!(!anonymous.owns(Some("x")));
    }

    #[test]
    fn resolve_prefers_requested_id() {
        let list = bankrolls();
        let active = resolve_active(&list, Some("side")).unwrap();
        assert_eq!(active.name, "Side");
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let list = bankrolls();
        let active = resolve_active(&list, None).unwrap();
        assert_eq!(active.name, "Main");
    }

    #[test]
    fn resolve_reports_unknown_id() {
        let list = bankrolls();
        let err = resolve_active(&list, Some("ghost")).unwrap_err();
        assert!(matches!(err, BancaError::UnknownBankroll { ref id } if id == "ghost"));
    }

    #[test]
    fn resolve_without_default_fails() {
        let list = vec![Bankroll::new("side", "Side", dec!(500), dec!(25))];
        assert!(matches!(resolve_active(&list, None), Err(BancaError::NoBankroll)));
    }
}
