//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the serialized shape of the core data model. To
//! update after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::GrantBuilder;
use grantboard::types::{FilterCriteria, GrantStatus, StatusFilter};

#[test]
fn snapshot_grant_record() {
    let grant = GrantBuilder::new(42)
        .name("Snapshot Fund")
        .organization("Snapshot Org")
        .amount(75_000)
        .deadline(2024, 10, 1)
        .status(GrantStatus::ClosingSoon)
        .sectors(&["Education", "Technology"])
        .build();

    insta::assert_json_snapshot!(grant, @r###"
    {
      "id": 42,
      "number": "GR-TEST-042",
      "name": "Snapshot Fund",
      "organization": "Snapshot Org",
      "description": "A grant used in tests.",
      "amount": 75000,
      "deadline": "2024-10-01",
      "status": "ClosingSoon",
      "sectors": [
        "Education",
        "Technology"
      ],
      "eligibility": "Anyone",
      "duration": "12 months",
      "matching_funds": "None required",
      "required_documents": [
        "Proposal"
      ],
      "applications_received": 0,
      "success_rate": "50%"
    }
    "###);
}

#[test]
fn snapshot_default_filter_criteria() {
    insta::assert_json_snapshot!(FilterCriteria::default(), @r###"
    {
      "sector": "All",
      "status": "All",
      "min_amount": "",
      "max_amount": "",
      "min_deadline": ""
    }
    "###);
}

#[test]
fn snapshot_constrained_filter_criteria() {
    let criteria = FilterCriteria {
        sector: "Agriculture".to_string(),
        status: StatusFilter::Only(GrantStatus::Open),
        min_amount: "10000".to_string(),
        max_amount: "90000".to_string(),
        min_deadline: "2024-06-01".to_string(),
    };
    insta::assert_json_snapshot!(criteria, @r###"
    {
      "sector": "Agriculture",
      "status": {
        "Only": "Open"
      },
      "min_amount": "10000",
      "max_amount": "90000",
      "min_deadline": "2024-06-01"
    }
    "###);
}
