use amortization_core::amortization::{calculate_schedule, calculate_summary, SummaryInput};
use amortization_core::{
    build_schedule, compute_payment, project_summary, round_half_up, AmortizationError, LoanTerms,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Reference scenarios
// ===========================================================================

#[test]
fn test_auto_loan_payment_matches_reference() {
    let payment = compute_payment(dec!(30000.00), dec!(0.03), 48).unwrap();
    assert!((payment - dec!(664.03)).abs() <= dec!(0.005));
}

#[test]
fn test_zero_rate_payment_is_exact() {
    assert_eq!(compute_payment(dec!(30000.00), dec!(0.00), 48).unwrap(), dec!(625.00));
}

#[test]
fn test_auto_loan_schedule_shape() {
    let schedule = build_schedule(dec!(30000.00), dec!(0.03), 48).unwrap();
    assert_eq!(schedule.len(), 48);
    assert_eq!(schedule.last().unwrap().remaining_balance, Decimal::ZERO);
}

#[test]
fn test_mortgage_summary_at_maturity() {
    let summary = project_summary(dec!(200000), dec!(0.03), 48, 48).unwrap();
    assert_eq!(summary.aggregate_principal_paid, dec!(200000));
}

#[test]
fn test_single_month_loan() {
    let schedule = build_schedule(dec!(1000.00), dec!(0.05), 1).unwrap();
    assert_eq!(schedule.len(), 1);
    let expected = round_half_up(dec!(1000.00) + dec!(1000.00) * dec!(0.05) / dec!(12));
    assert_eq!(schedule[0].monthly_payment, expected);
    assert_eq!(schedule[0].remaining_balance, Decimal::ZERO);
}

#[test]
fn test_rounding_law() {
    assert_eq!(round_half_up(dec!(0.005)), dec!(0.01));
    assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
    assert_eq!(round_half_up(dec!(0.0049)), dec!(0.00));
}

#[test]
fn test_thirty_year_mortgage_totals() {
    let terms = LoanTerms::new(dec!(200000.00), dec!(0.06), 360).unwrap();
    let out = calculate_schedule(&terms).unwrap();
    let result = &out.result;

    assert_eq!(result.regular_payment, dec!(1199.10));
    assert_eq!(result.schedule.len(), 360);
    assert_eq!(result.total_paid, result.total_interest + dec!(200000.00));
    assert_eq!(result.total_interest, dec!(231677.04));
    // Rounding 1199.1010.. down leaves about a dollar for the last month.
    assert_eq!(result.final_payment, dec!(1200.14));
    assert_eq!(out.warnings.len(), 1);
}

#[test]
fn test_auto_loan_final_payment_absorbs_residue() {
    let schedule = build_schedule(dec!(30000.00), dec!(0.03), 48).unwrap();
    let last = &schedule[47];
    assert_eq!(last.monthly_payment, dec!(664.04));
    assert_eq!(last.interest_accrued, dec!(1.66));
    assert_eq!(last.principal_portion, dec!(662.38));
}

#[test]
fn test_summary_envelope_echoes_inputs() {
    let input = SummaryInput {
        terms: LoanTerms::new(dec!(30000.00), dec!(0.03), 48).unwrap(),
        month: 12,
    };
    let out = calculate_summary(&input).unwrap();
    assert_eq!(out.result.month, 12);
    assert_eq!(out.assumptions["month"], 12);
    assert_eq!(out.assumptions["principal"], "30000.00");
    assert_eq!(out.metadata.precision, "rust_decimal_128bit");
}

#[test]
fn test_summary_matches_schedule_slice() {
    let schedule = build_schedule(dec!(30000.00), dec!(0.03), 48).unwrap();
    let summary = project_summary(dec!(30000.00), dec!(0.03), 48, 24).unwrap();

    let interest: Decimal = schedule[..24].iter().map(|r| r.interest_accrued).sum();
    assert_eq!(summary.remaining_balance, schedule[23].remaining_balance);
    assert_eq!(summary.aggregate_interest_paid, interest);
}

#[test]
fn test_error_kinds() {
    assert_eq!(
        build_schedule(dec!(1000), dec!(0.05), 0).unwrap_err(),
        AmortizationError::InvalidTerm { term_months: 0 }
    );
    assert_eq!(
        build_schedule(dec!(1000), dec!(-0.05), 12).unwrap_err(),
        AmortizationError::InvalidRate {
            annual_rate: dec!(-0.05)
        }
    );
    assert_eq!(
        build_schedule(dec!(-1000), dec!(0.05), 12).unwrap_err(),
        AmortizationError::InvalidPrincipal {
            principal: dec!(-1000)
        }
    );
}

// ===========================================================================
// Schedule invariants over arbitrary loans
// ===========================================================================

fn loan_terms() -> impl Strategy<Value = (Decimal, Decimal, u32)> {
    (
        1u64..100_000_000u64, // cents
        0u32..2_500u32,       // basis points
        1u32..480u32,
    )
        .prop_map(|(cents, bps, term)| (Decimal::new(cents as i64, 2), Decimal::new(bps as i64, 4), term))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_schedule_has_one_row_per_month((principal, rate, term) in loan_terms()) {
        let schedule = build_schedule(principal, rate, term).unwrap();
        prop_assert_eq!(schedule.len(), term as usize);
        for (idx, row) in schedule.iter().enumerate() {
            prop_assert_eq!(row.month as usize, idx + 1);
        }
    }

    #[test]
    fn prop_schedule_closes_at_exactly_zero((principal, rate, term) in loan_terms()) {
        let schedule = build_schedule(principal, rate, term).unwrap();
        prop_assert!(schedule.last().unwrap().remaining_balance.is_zero());
    }

    #[test]
    fn prop_payment_splits_into_interest_and_principal((principal, rate, term) in loan_terms()) {
        let schedule = build_schedule(principal, rate, term).unwrap();
        let mut previous = principal;
        for row in &schedule {
            let principal_portion = previous - row.remaining_balance;
            prop_assert_eq!(row.principal_portion, principal_portion);
            prop_assert_eq!(row.monthly_payment, row.interest_accrued + principal_portion);
            previous = row.remaining_balance;
        }
    }

    #[test]
    fn prop_only_last_payment_differs((principal, rate, term) in loan_terms()) {
        let schedule = build_schedule(principal, rate, term).unwrap();
        let regular = schedule[0].monthly_payment;
        for row in &schedule[..schedule.len() - 1] {
            prop_assert_eq!(row.monthly_payment, regular);
        }
    }

    #[test]
    fn prop_zero_rate_accrues_no_interest(cents in 1u64..100_000_000u64, term in 1u32..480u32) {
        let principal = Decimal::new(cents as i64, 2);
        let schedule = build_schedule(principal, Decimal::ZERO, term).unwrap();
        prop_assert!(schedule.iter().all(|r| r.interest_accrued.is_zero()));
        let straight_line = round_half_up(principal / Decimal::from(term));
        prop_assert_eq!(schedule[0].monthly_payment, straight_line);
    }

    #[test]
    fn prop_amounts_are_whole_cents((principal, rate, term) in loan_terms()) {
        let schedule = build_schedule(principal, rate, term).unwrap();
        for row in &schedule {
            prop_assert_eq!(row.monthly_payment.scale(), 2);
            prop_assert_eq!(row.interest_accrued.scale(), 2);
            prop_assert_eq!(row.principal_portion.scale(), 2);
            prop_assert_eq!(row.remaining_balance.scale(), 2);
        }
    }

    #[test]
    fn prop_schedule_is_deterministic((principal, rate, term) in loan_terms()) {
        let first = serde_json::to_string(&build_schedule(principal, rate, term).unwrap()).unwrap();
        let second = serde_json::to_string(&build_schedule(principal, rate, term).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_summary_principal_plus_balance_is_principal(
        (principal, rate, term) in loan_terms(),
        pick in any::<prop::sample::Index>(),
    ) {
        let month = pick.index(term as usize) as u32 + 1;
        let summary = project_summary(principal, rate, term, month).unwrap();
        prop_assert_eq!(summary.aggregate_principal_paid + summary.remaining_balance, principal);
    }
}
