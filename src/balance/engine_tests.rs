/////////////////////////////TESTS////////////////////////////////////////////////////
/*
scenario tests across parser, solver, ledger and comparator:
invalid equations empty the pans
worked examples (2x+3=5, x+x=4, 0x+5=5, x=x)
tokenize / concatenate round trip
re-normalizing is idempotent
negative counts
mirror symmetry of the balance state
*/

#[cfg(test)]
mod tests1 {
    use crate::balance::comparator::{BalanceComparator, BalanceState};
    use crate::balance::config::{EngineConfig, Variant};
    use crate::balance::engine::BalanceEngine;
    use crate::balance::ledger::{Side, UnitWeights, WeightedItemLedger};
    use crate::symbolic::linear_solver::{SolutionKind, solve_equation};
    use crate::symbolic::parse_equation::Equation;
    use crate::symbolic::parse_terms::{CONSTANT_TERM, SideTerms, tokenize_side};
    use crate::symbolic::utils::strip_whitespace;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    const INVALID: [&str; 8] = ["", "2x+3", "x", "x=1=2", "==", "=x=", "a=b=c=d", "  5  "];

    #[test]
    fn test_invalid_equations_zero_all_counts() {
        for variant in Variant::iter() {
            let mut engine = BalanceEngine::new(EngineConfig::preset(variant)).unwrap();
            for text in INVALID {
                engine.set_equation("3x+2=8");
                engine.increment(Side::Left, "bag");
                let state = engine.set_equation(text);
                assert!(state.ledger.is_empty(), "{:?} left counts behind", text);
                assert!(Equation::parse(text).is_err());
            }
        }
    }

    #[test]
    fn test_worked_example() {
        let eq = Equation::parse("2x+3=5").unwrap();
        assert_eq!(eq.left, SideTerms::from([("x", 2), (CONSTANT_TERM, 3)]));
        assert_eq!(eq.right, SideTerms::from([(CONSTANT_TERM, 5)]));
        let solution = solve_equation(&eq);
        assert_eq!(solution.kind, SolutionKind::Unique);
        assert_relative_eq!(solution.value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_same_name_terms_sum() {
        let eq = Equation::parse("x+x=4").unwrap();
        assert_eq!(eq.left.coefficient("x"), 2);
        assert_relative_eq!(solve_equation(&eq).value, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_explicit_zero_is_not_one() {
        let eq = Equation::parse("0x+5=5").unwrap();
        assert_eq!(eq.left.get("x"), Some(0));
        let mut engine = BalanceEngine::new(EngineConfig::default()).unwrap();
        engine.set_equation("0x+5=5");
        assert_eq!(engine.state().ledger.count(Side::Left, "box"), Some(0));
    }

    #[test]
    fn test_identity_equation_does_not_crash() {
        for variant in Variant::iter() {
            let mut engine = BalanceEngine::new(EngineConfig::preset(variant)).unwrap();
            engine.set_equation("x=x");
            let solution = engine.state().solution.unwrap();
            assert!(!solution.value.is_finite());
            assert!(engine.state().weights.get("box").unwrap().is_nan());
            // both pans weigh NaN: no ordering, treated as level
            assert_eq!(engine.snapshot().state(), BalanceState::Balanced);
            engine.increment(Side::Left, "bag");
            let _ = engine.snapshot().state();
        }
    }

    #[test]
    fn test_contradiction_stores_infinity() {
        let mut engine = BalanceEngine::new(EngineConfig::default()).unwrap();
        engine.set_equation("x+1=x+2");
        let weight = engine.state().weights.get("box").unwrap();
        assert_eq!(weight, f64::INFINITY);
        let _ = engine.snapshot();
    }

    #[test]
    fn test_tokenize_round_trip() {
        let sides = [
            "2x+3", "-x-4", "x", "+5", "12ab-3c+0x", "-0", "3", "x+x+x", "-10y+20-z", "a",
        ];
        for side in sides {
            let terms = tokenize_side(side);
            assert_eq!(terms.concat(), side);
            for (i, term) in terms.iter().enumerate() {
                if i > 0 {
                    assert!(term.starts_with('+') || term.starts_with('-'), "{}", term);
                }
            }
        }
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for text in ["2 x + 3 = 5", " x - 7 = - 2x ", "3a + b = 0x", "x=x", "  = 4 "] {
            let stripped = strip_whitespace(text);
            assert_eq!(Equation::parse(text).unwrap(), Equation::parse(&stripped).unwrap());
            assert_eq!(
                Equation::parse(&stripped).unwrap(),
                Equation::parse(&strip_whitespace(&stripped)).unwrap()
            );
        }
    }

    #[test]
    fn test_negative_counts_reduce_total() {
        let mut engine = BalanceEngine::new(EngineConfig::default()).unwrap();
        engine.set_equation("x=2");
        engine.decrement(Side::Left, "bag");
        engine.decrement(Side::Left, "bag");
        let snap = engine.snapshot();
        assert_eq!(snap.count(Side::Left, "bag"), Some(-2));
        assert_relative_eq!(snap.weighing.left_total, 0.0, epsilon = 1e-12);
        assert_eq!(snap.state(), BalanceState::RightHeavier);
    }

    #[test]
    fn test_balance_is_mirror_symmetric() {
        let items = vec!["box".to_string(), "bag".to_string()];
        let cases: [(&[i64; 2], &[i64; 2], f64); 6] = [
            (&[1, 2], &[0, 5], 3.0),
            (&[2, 0], &[0, 1], 0.5),
            (&[0, -3], &[1, 0], 1.0 / 3.0),
            (&[3, 0], &[0, 1], 1.0 / 3.0),
            (&[1, 1], &[1, 1], f64::NAN),
            (&[1, 0], &[0, 4], f64::INFINITY),
        ];
        for (left, right, box_weight) in cases {
            let mut ledger = WeightedItemLedger::new(&items);
            for (i, item) in items.iter().enumerate() {
                ledger.set(Side::Left, item, left[i]).unwrap();
                ledger.set(Side::Right, item, right[i]).unwrap();
            }
            let weights = UnitWeights::new(vec![("box".to_string(), box_weight), ("bag".to_string(), 1.0)]);
            for comparator in [BalanceComparator::new(None), BalanceComparator::new(Some(10))] {
                let state = comparator.weigh(&ledger, &weights).state;
                let mirrored = comparator.weigh(&ledger.swapped(), &weights).state;
                assert_eq!(mirrored, state.swapped(), "{:?} vs {:?}", left, right);
            }
        }
    }

    #[test]
    fn test_rounding_variant_balances_thirds() {
        // 3x = 1: x = 1/3 and three boxes must balance one bag
        let mut engine = BalanceEngine::new(EngineConfig::preset(Variant::TwoItems)).unwrap();
        engine.set_equation("3x=1");
        assert_eq!(engine.snapshot().state(), BalanceState::Balanced);
        engine.set_equation("7x+1=2x+2");
        assert_eq!(engine.snapshot().state(), BalanceState::Balanced);
    }

    #[test]
    fn test_mirrored_ledger_swaps_state() {
        let mut engine = BalanceEngine::new(EngineConfig::default()).unwrap();
        for text in ["2x+3=5", "x=4", "5=2x-1"] {
            engine.set_equation(text);
            engine.increment(Side::Left, "box");
            let state = engine.snapshot().state();
            let mirrored = BalanceComparator::new(engine.config().round_digits)
                .weigh(&engine.state().ledger.swapped(), &engine.state().weights)
                .state;
            assert_eq!(mirrored, state.swapped());
        }
    }
}
