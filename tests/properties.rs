use coffee_rota::allocation::{
    visit_counts, Allocator, CreditLedger, GreedyAllocator, LayoutPolicy, ProportionalAllocator,
    Strategy,
};
use coffee_rota::models::{Plan, PriceVector, Roster};
use proptest::prelude::*;

fn make_plan(prices: Vec<f64>, days: u32) -> Plan {
    Plan::new(Roster::default(), PriceVector::new(prices), days).expect("plan build failed")
}

proptest! {
    #[test]
    fn greedy_totals_cover_every_bill(
        prices in prop::collection::vec(1.0f64..=20.0, 7),
        days in 1u32..=400,
    ) {
        let plan = make_plan(prices, days);
        let allocation = GreedyAllocator::new().allocate(&plan);
        let expected = f64::from(days) * plan.bill_total();
        prop_assert_eq!(allocation.schedule.len(), days as usize);
        prop_assert!((allocation.totals.grand_total() - expected).abs() < 1e-6 * expected);
    }

    #[test]
    fn greedy_repeat_payer_holds_lowest_credit(
        prices in prop::collection::vec(1.0f64..=20.0, 7),
        days in 2u32..=200,
    ) {
        let plan = make_plan(prices, days);
        let allocation = GreedyAllocator::new().allocate(&plan);
        let payers: Vec<usize> = allocation.schedule.iter().map(|a| a.participant).collect();

        let mut ledger = CreditLedger::new(plan.participant_count());
        for pair in payers.windows(2) {
            ledger.settle_day(pair[0], &plan.prices, plan.bill_total());
            if pair[0] == pair[1] {
                let own = ledger.credit(pair[0]).unwrap();
                prop_assert!(ledger.credits().iter().all(|&c| c >= own));
            }
        }
    }

    #[test]
    fn greedy_credits_net_to_zero(
        prices in prop::collection::vec(1.0f64..=20.0, 7),
        days in 0u32..=300,
    ) {
        let plan = make_plan(prices, days);
        let (_, ledger) = GreedyAllocator::new().simulate(&plan);
        prop_assert!(ledger.sum().abs() < 1e-6 * (1.0 + f64::from(days)));
    }

    #[test]
    fn proportional_counts_within_rounding_of_duration(
        prices in prop::collection::vec(1.0f64..=20.0, 7),
        days in 0u32..=3000,
    ) {
        let counts = visit_counts(&PriceVector::new(prices), days);
        let total: u32 = counts.iter().sum();
        prop_assert!((f64::from(total) - f64::from(days)).abs() <= 0.5 * 7.0 + 1e-9);
    }

    #[test]
    fn proportional_layout_never_exceeds_duration(
        prices in prop::collection::vec(1.0f64..=20.0, 7),
        days in 0u32..=500,
        cycle_counter in any::<bool>(),
    ) {
        let layout = if cycle_counter { LayoutPolicy::CycleCounter } else { LayoutPolicy::Compact };
        let plan = make_plan(prices, days);
        let allocation = ProportionalAllocator::new().with_layout(layout).allocate(&plan);

        prop_assert!(allocation.schedule.len() <= days as usize);
        prop_assert!(allocation.schedule.last_day() <= days);
        let laid_out = allocation.schedule.visit_counts(plan.participant_count());
        for (used, planned) in laid_out.iter().zip(&allocation.visit_counts) {
            prop_assert!(used <= planned);
        }
    }

    #[test]
    fn allocations_are_idempotent(
        prices in prop::collection::vec(1.0f64..=20.0, 7),
        days in 0u32..=300,
    ) {
        let plan = make_plan(prices, days);
        for strategy in [Strategy::Greedy, Strategy::Proportional] {
            let allocator = strategy.allocator(LayoutPolicy::default());
            prop_assert_eq!(allocator.allocate(&plan), allocator.allocate(&plan));
        }
    }
}

#[test]
fn empty_plan_has_no_schedule_and_zero_totals() {
    let plan = make_plan(vec![3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 6.0], 0);
    for strategy in [Strategy::Greedy, Strategy::Proportional] {
        let allocation = strategy.allocator(LayoutPolicy::default()).allocate(&plan);
        assert!(allocation.schedule.is_empty());
        for p in &allocation.totals.participants {
            assert_eq!(p.total_paid, 0.0);
            assert_eq!(p.average_paid, 0.0);
        }
    }
}

#[test]
fn one_day_greedy_picks_first_priciest() {
    let plan = make_plan(vec![3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 6.0], 1);
    let allocation = GreedyAllocator::new().allocate(&plan);
    assert_eq!(allocation.schedule.len(), 1);
    assert_eq!(allocation.schedule.payer_on(1), Some(5));
}

#[test]
fn one_week_proportional_gives_everyone_one_visit() {
    let plan = make_plan(vec![3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 6.0], 7);
    let allocation = ProportionalAllocator::new().allocate(&plan);
    assert_eq!(allocation.visit_counts, vec![1; 7]);
    assert_eq!(allocation.schedule.len(), 7);
}
