//! Unit tests for the seed store and its validation.

use crate::helpers::seed_grant;
use grantboard::store::{SECTOR_OPTIONS, StoreError, seed_grants, validate};
use grantboard::types::{GrantStatus, SECTOR_ALL_SECTORS};

#[test]
fn test_seed_store_is_valid() {
    assert!(validate(&seed_grants()).is_ok());
}

#[test]
fn test_seed_grant_shape() {
    let grant = seed_grant();
    assert_eq!(grant.id, 1);
    assert_eq!(grant.amount, 50_000);
    assert_eq!(grant.deadline.to_string(), "2024-06-30");
    assert_eq!(grant.status, GrantStatus::Open);
    assert!(grant.has_sector("Agriculture"));
    // Exactly 6 required documents, in seeded order
    assert_eq!(grant.required_documents.len(), 6);
    assert_eq!(grant.required_documents[0], "Registration certificate");
    assert_eq!(grant.required_documents[5], "Tax clearance");
}

#[test]
fn test_every_seed_grant_has_sectors_and_documents() {
    for grant in seed_grants() {
        assert!(!grant.sectors.is_empty(), "grant {} has no sectors", grant.id);
        assert!(
            !grant.required_documents.is_empty(),
            "grant {} has no documents",
            grant.id
        );
    }
}

#[test]
fn test_seed_covers_all_statuses() {
    let grants = seed_grants();
    for status in GrantStatus::ALL {
        assert!(
            grants.iter().any(|g| g.status == *status),
            "no seed grant with status {:?}",
            status
        );
    }
}

#[test]
fn test_duplicate_id_is_rejected() {
    let mut grants = seed_grants();
    let dup = grants[0].id;
    grants[2].id = dup;
    match validate(&grants) {
        Err(StoreError::DuplicateId(id)) => assert_eq!(id, dup),
        other => panic!("expected DuplicateId, got {:?}", other),
    }
}

#[test]
fn test_sector_options_cover_seed_sectors() {
    let grants = seed_grants();
    assert_eq!(SECTOR_OPTIONS[0], SECTOR_ALL_SECTORS);
    for grant in &grants {
        for sector in &grant.sectors {
            assert!(
                SECTOR_OPTIONS.contains(sector),
                "sector {:?} missing from options",
                sector
            );
        }
    }
}
