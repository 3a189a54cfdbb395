//! Ordered bracket lookup.
//!
//! Several scoring rules are tiers where only one bracket may apply: age bands, smoking status,
//! activity level, the frequent-symptom tally, LDL and BMI bands. Each rule is written as a table
//! of brackets in priority order and [`first_match`] returns the value of the first bracket whose
//! predicate holds. Brackets never stack.

/// One tier of an exclusive rule: a predicate over the subject and the value it yields.
pub struct Bracket<T: ?Sized> {
    pub applies: fn(&T) -> bool,
    pub value: f64,
}

impl<T: ?Sized> Bracket<T> {
    pub const fn new(applies: fn(&T) -> bool, value: f64) -> Self {
        Self { applies, value }
    }
}

/// Value of the first bracket in `brackets` that applies to `subject`, if any.
pub fn first_match<T: ?Sized>(brackets: &[Bracket<T>], subject: &T) -> Option<f64> {
    brackets
        .iter()
        .find(|bracket| (bracket.applies)(subject))
        .map(|bracket| bracket.value)
}

/// Multiplicative factor from an exclusive rule; 1.0 when no bracket applies.
pub fn factor<T: ?Sized>(brackets: &[Bracket<T>], subject: &T) -> f64 {
    first_match(brackets, subject).unwrap_or(1.0)
}

/// Additive points from an exclusive rule; 0.0 when no bracket applies.
pub fn points<T: ?Sized>(brackets: &[Bracket<T>], subject: &T) -> f64 {
    first_match(brackets, subject).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANDS: &[Bracket<u32>] = &[
        Bracket::new(|n: &u32| *n >= 10, 3.0),
        Bracket::new(|n: &u32| *n >= 5, 2.0),
    ];

    #[test]
    fn test_first_matching_bracket_wins() {
        // 12 satisfies both predicates; only the first is applied.
        assert_eq!(first_match(BANDS, &12), Some(3.0));
        assert_eq!(first_match(BANDS, &7), Some(2.0));
    }

    #[test]
    fn test_no_match_falls_back_to_neutral() {
        assert_eq!(first_match(BANDS, &1), None);
        assert_eq!(factor(BANDS, &1), 1.0);
        assert_eq!(points(BANDS, &1), 0.0);
    }

    #[test]
    fn test_empty_table_never_matches() {
        let empty: &[Bracket<u32>] = &[];
        assert_eq!(first_match(empty, &100), None);
    }
}
