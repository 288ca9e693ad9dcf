//! Property tests for the filter predicate

use cot_model::{CustomerDraft, CustomerId, CustomerRecord, OnboardingStatus};
use cot_query::{filter, matches_search, StatusFilter};
use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = OnboardingStatus> {
    prop::sample::select(vec![
        OnboardingStatus::InProgress,
        OnboardingStatus::Completed,
        OnboardingStatus::Blocked,
    ])
}

fn record_strategy() -> impl Strategy<Value = CustomerRecord> {
    (
        "[A-Za-z ]{0,12}",
        "[A-Za-z ]{0,12}",
        "[A-Za-z ]{0,12}",
        status_strategy(),
    )
        .prop_map(|(customer, partner, requester, status)| {
            CustomerRecord::from_draft(
                CustomerId::new(),
                CustomerDraft::new(customer, partner)
                    .with_requester(requester)
                    .with_status(status),
            )
        })
}

fn filter_strategy() -> impl Strategy<Value = StatusFilter> {
    prop_oneof![
        Just(StatusFilter::All),
        status_strategy().prop_map(StatusFilter::Only),
    ]
}

proptest! {
    #[test]
    fn output_is_ordered_subset_of_input(
        records in prop::collection::vec(record_strategy(), 0..20),
        term in "[A-Za-z]{0,6}",
        status in filter_strategy(),
    ) {
        let visible = filter(&records, &term, status);

        // Every output record exists in the input, and relative order
        // matches the input order.
        let mut cursor = 0usize;
        for item in &visible {
            let pos = records[cursor..]
                .iter()
                .position(|r| r.id == item.id)
                .expect("output record missing from input");
            cursor += pos + 1;
        }
    }

    #[test]
    fn membership_matches_predicate(
        records in prop::collection::vec(record_strategy(), 0..20),
        term in "[A-Za-z]{0,6}",
        status in filter_strategy(),
    ) {
        let visible = filter(&records, &term, status);
        for record in &records {
            let expected = matches_search(record, &term)
                && status.matches(record.onboarding_status);
            let present = visible.iter().any(|r| r.id == record.id);
            prop_assert_eq!(expected, present);
        }
    }

    #[test]
    fn filter_is_pure_and_idempotent(
        records in prop::collection::vec(record_strategy(), 0..20),
        term in "[A-Za-z]{0,6}",
        status in filter_strategy(),
    ) {
        let before = records.clone();
        let first: Vec<CustomerRecord> =
            filter(&records, &term, status).into_iter().cloned().collect();
        let second: Vec<CustomerRecord> =
            filter(&records, &term, status).into_iter().cloned().collect();
        let again: Vec<CustomerRecord> =
            filter(&first, &term, status).into_iter().cloned().collect();

        prop_assert_eq!(&records, &before);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &again);
    }

    #[test]
    fn empty_term_and_all_is_identity(
        records in prop::collection::vec(record_strategy(), 0..20),
    ) {
        let visible = filter(&records, "", StatusFilter::All);
        prop_assert_eq!(visible.len(), records.len());
    }
}

#[test]
fn demo_data_scenarios() {
    let store = cot_store::RecordStore::with_demo_data();
    let records = store.customers.list();

    let epharma = filter(records, "epharma", StatusFilter::All);
    assert_eq!(epharma.len(), 1);
    assert_eq!(epharma[0].customer, "Epharma");

    let blocked = filter(records, "", StatusFilter::Only(OnboardingStatus::Blocked));
    assert_eq!(blocked.len(), 1);
    assert_eq!(blocked[0].customer, "BCDR AerieHub");
}
