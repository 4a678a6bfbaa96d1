use super::common::ids;
use crate::workflows::beneficiaries::query::{
    BeneficiaryQuery, QueryError, QueryParams, SortConfig, SortDirection, SortKey,
};
use crate::workflows::beneficiaries::sample::sample_beneficiaries;
use crate::workflows::beneficiaries::{BeneficiaryStatus, RiskBand};

fn sorted_by(sort: SortConfig) -> Vec<u32> {
    let query = BeneficiaryQuery {
        sort,
        ..BeneficiaryQuery::default()
    };
    ids(&query.apply(&sample_beneficiaries()))
}

#[test]
fn default_sort_is_name_ascending() {
    assert_eq!(SortConfig::default(), SortConfig::new(SortKey::Name, SortDirection::Asc));
    assert_eq!(sorted_by(SortConfig::default()), vec![5, 6, 8, 3, 2, 1, 7, 4]);
}

#[test]
fn toggling_credit_score_reverses_the_rows() {
    let ascending = SortConfig::default().toggle(SortKey::CreditScore);
    assert_eq!(ascending.direction, SortDirection::Asc);
    let descending = ascending.toggle(SortKey::CreditScore);
    assert_eq!(descending.direction, SortDirection::Desc);

    let up = sorted_by(ascending);
    let mut down = sorted_by(descending);
    assert_eq!(up, vec![7, 4, 6, 2, 5, 1, 8, 3]);
    down.reverse();
    assert_eq!(up, down);
}

#[test]
fn toggle_from_descending_or_new_column_is_ascending() {
    let descending = SortConfig::new(SortKey::Email, SortDirection::Desc);
    assert_eq!(descending.toggle(SortKey::Email).direction, SortDirection::Asc);
    assert_eq!(
        descending.toggle(SortKey::Status),
        SortConfig::new(SortKey::Status, SortDirection::Asc)
    );
}

#[test]
fn income_band_sorts_by_band_minimum() {
    let order = sorted_by(SortConfig::new(SortKey::IncomeBand, SortDirection::Asc));
    assert_eq!(order, vec![4, 7, 2, 6, 5, 1, 8, 3]);
}

#[test]
fn risk_band_sorts_as_text_and_keeps_ties_in_input_order() {
    let order = sorted_by(SortConfig::new(SortKey::RiskBand, SortDirection::Asc));
    assert_eq!(order, vec![4, 7, 1, 3, 5, 8, 2, 6]);
}

#[test]
fn approved_filter_returns_four_rows() {
    let query = BeneficiaryQuery {
        status: Some(BeneficiaryStatus::Approved),
        ..BeneficiaryQuery::default()
    };
    let rows = query.apply(&sample_beneficiaries());

    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| row.status == BeneficiaryStatus::Approved));
}

#[test]
fn search_matches_name_or_email_case_insensitively() {
    let query = BeneficiaryQuery {
        search: "SH".to_string(),
        ..BeneficiaryQuery::default()
    };
    assert_eq!(ids(&query.apply(&sample_beneficiaries())), vec![8, 2, 1]);
}

#[test]
fn filters_combine() {
    let query = BeneficiaryQuery {
        status: Some(BeneficiaryStatus::Pending),
        risk: Some(RiskBand::High),
        ..BeneficiaryQuery::default()
    };
    assert_eq!(ids(&query.apply(&sample_beneficiaries())), vec![7]);
}

#[test]
fn params_accept_all_and_reject_unknown_values() {
    let query = BeneficiaryQuery::try_from(QueryParams {
        status: Some("all".to_string()),
        risk: Some("high".to_string()),
        sort: Some("creditScore".to_string()),
        direction: Some("desc".to_string()),
        ..QueryParams::default()
    })
    .expect("valid params");
    assert_eq!(query.status, None);
    assert_eq!(query.risk, Some(RiskBand::High));
    assert_eq!(query.sort, SortConfig::new(SortKey::CreditScore, SortDirection::Desc));

    let err = BeneficiaryQuery::try_from(QueryParams {
        sort: Some("salary".to_string()),
        ..QueryParams::default()
    })
    .expect_err("unknown column");
    assert_eq!(err, QueryError::SortKey("salary".to_string()));
}
