// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::sync::Arc;

use crate::config::RequiredFields;
use crate::error::ServiceError;
use crate::service::BuildingService;
use crate::storage::Store;
use crate::types::building::{Building, BuildingUpdate, NewBuilding};
use crate::types::id::BuildingId;

fn floors(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

fn tower_a() -> NewBuilding {
    NewBuilding::new("tower-a", "1 Main St", floors(&["f1", "f2"]))
}

#[test]
fn test_create_returns_name_hash() {
    let svc = BuildingService::default();
    let id = svc.create(tower_a()).unwrap();
    assert_eq!(id, BuildingId::from_name("tower-a"));

    let rec = svc.get(id.as_str()).unwrap();
    assert_eq!(rec.name, "tower-a");
    assert_eq!(rec.address, "1 Main St");
    assert_eq!(rec.floors, floors(&["f1", "f2"]));
    assert!(rec.modified.is_none());
}

#[test]
fn test_create_duplicate_rejected() {
    let svc = BuildingService::default();
    let id = svc.create(tower_a()).unwrap();
    let created = svc.get(id.as_str()).unwrap().created;

    let err = svc.create(NewBuilding::new("tower-a", "elsewhere", vec![])).unwrap_err();
    assert_eq!(err, ServiceError::AlreadyExists(id.clone()));

    // Original record untouched
    let rec = svc.get(id.as_str()).unwrap();
    assert_eq!(rec.address, "1 Main St");
    assert_eq!(rec.created, created);
    assert_eq!(svc.count(), 1);
}

#[test]
fn test_create_trims_and_hashes_trimmed_name() {
    let svc = BuildingService::default();
    let id = svc
        .create(NewBuilding::new("  tower-a \t", "  1 Main St ", vec![]))
        .unwrap();
    assert_eq!(id, BuildingId::from_name("tower-a"));
    let rec = svc.get(id.as_str()).unwrap();
    assert_eq!(rec.name, "tower-a");
    assert_eq!(rec.address, "1 Main St");
}

#[test]
fn test_create_requires_name() {
    let svc = BuildingService::default();
    let err = svc.create(NewBuilding::new("   ", "1 Main St", floors(&["f1"]))).unwrap_err();
    assert_eq!(err, ServiceError::MissingRequiredField("name"));
    assert_eq!(svc.count(), 0);
}

#[test]
fn test_name_only_policy_allows_bare_name() {
    let svc = BuildingService::new(RequiredFields::NameOnly);
    let id = svc.create(NewBuilding::new("shed", "", vec![])).unwrap();
    let rec = svc.get(id.as_str()).unwrap();
    assert!(rec.address.is_empty());
    assert!(rec.floors.is_empty());
}

#[test]
fn test_strict_policy_requires_address_and_floors() {
    let svc = BuildingService::new(RequiredFields::All);
    assert_eq!(
        svc.create(NewBuilding::new("shed", " ", floors(&["f1"]))).unwrap_err(),
        ServiceError::MissingRequiredField("address")
    );
    assert_eq!(
        svc.create(NewBuilding::new("shed", "yard", vec![])).unwrap_err(),
        ServiceError::MissingRequiredField("floors")
    );
    assert!(svc.create(NewBuilding::new("shed", "yard", floors(&["g"]))).is_ok());

    let id = BuildingId::from_name("shed").into_inner();
    assert_eq!(
        svc.update(BuildingUpdate::new(id, "shed", "yard", vec![])).unwrap_err(),
        ServiceError::MissingRequiredField("floors")
    );
}

#[test]
fn test_update_replaces_details_and_sets_modified() {
    let svc = BuildingService::default();
    let id = svc.create(tower_a()).unwrap();
    let before = svc.get(id.as_str()).unwrap();

    svc.update(BuildingUpdate::new(id.as_str(), "tower-a", "2 Main St", floors(&["f1"])))
        .unwrap();

    let after = svc.get(id.as_str()).unwrap();
    assert_eq!(after.address, "2 Main St");
    assert_eq!(after.floors, floors(&["f1"]));
    assert_eq!(after.name, "tower-a");
    assert_eq!(after.created, before.created);
    let modified = after.modified.expect("modified set by update");
    assert!(modified >= after.created);
}

#[test]
fn test_update_mismatch_regardless_of_existence() {
    let svc = BuildingService::default();

    // Nothing stored at all
    let err = svc
        .update(BuildingUpdate::new("deadbeef", "tower-a", "x", vec![]))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Mismatch { .. }));

    // Both ids stored, still a mismatch
    let a = svc.create(tower_a()).unwrap();
    svc.create(NewBuilding::new("tower-b", "", vec![])).unwrap();
    let err = svc
        .update(BuildingUpdate::new(a.as_str(), "tower-b", "x", vec![]))
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::Mismatch {
            id: a.as_str().to_string(),
            name: "tower-b".to_string()
        }
    );
    assert_eq!(svc.get(a.as_str()).unwrap().address, "1 Main St");
}

#[test]
fn test_update_missing_record() {
    let svc = BuildingService::default();
    let id = BuildingId::from_name("ghost");
    let err = svc
        .update(BuildingUpdate::new(id.as_str(), "ghost", "", vec![]))
        .unwrap_err();
    assert_eq!(err, ServiceError::NotFound(id.into_inner()));
    assert_eq!(svc.count(), 0);
}

#[test]
fn test_update_requires_id_and_name() {
    let svc = BuildingService::default();
    assert_eq!(
        svc.update(BuildingUpdate::new(" ", "tower-a", "", vec![])).unwrap_err(),
        ServiceError::MissingRequiredField("id")
    );
    assert_eq!(
        svc.update(BuildingUpdate::new("abc", "", "", vec![])).unwrap_err(),
        ServiceError::MissingRequiredField("name")
    );
}

#[test]
fn test_get_requires_id() {
    let svc = BuildingService::default();
    assert_eq!(svc.get("").unwrap_err(), ServiceError::MissingRequiredField("id"));
    assert_eq!(svc.get("  ").unwrap_err(), ServiceError::MissingRequiredField("id"));
    assert_eq!(
        svc.get("abc").unwrap_err(),
        ServiceError::NotFound("abc".to_string())
    );
}

#[test]
fn test_delete_then_get() {
    let svc = BuildingService::default();
    let id = svc.create(tower_a()).unwrap();

    svc.delete(id.as_str()).unwrap();
    assert_eq!(
        svc.get(id.as_str()).unwrap_err(),
        ServiceError::NotFound(id.as_str().to_string())
    );
    assert_eq!(
        svc.delete(id.as_str()).unwrap_err(),
        ServiceError::NotFound(id.as_str().to_string())
    );
    assert_eq!(svc.delete("").unwrap_err(), ServiceError::MissingRequiredField("id"));
}

#[test]
fn test_recreate_after_delete() {
    let svc = BuildingService::default();
    let id = svc.create(tower_a()).unwrap();
    svc.update(BuildingUpdate::new(id.as_str(), "tower-a", "2 Main St", vec![]))
        .unwrap();
    svc.delete(id.as_str()).unwrap();

    let again = svc.create(tower_a()).unwrap();
    assert_eq!(again, id);
    let rec = svc.get(id.as_str()).unwrap();
    assert_eq!(rec.address, "1 Main St");
    assert!(rec.modified.is_none());
}

#[test]
fn test_get_all() {
    let svc = BuildingService::default();
    assert_eq!(svc.get_all().unwrap_err(), ServiceError::EmptyResult);

    let a = svc.create(tower_a()).unwrap();
    let b = svc.create(NewBuilding::new("tower-b", "", vec![])).unwrap();

    let all = svc.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|r| r.id == a));
    assert!(all.iter().any(|r| r.id == b));

    svc.delete(a.as_str()).unwrap();
    svc.delete(b.as_str()).unwrap();
    assert_eq!(svc.get_all().unwrap_err(), ServiceError::EmptyResult);
}

#[test]
fn test_injected_store_is_shared() {
    let store: Arc<Store<Building>> = Arc::new(Store::new());
    let svc = BuildingService::with_store(store.clone(), RequiredFields::NameOnly);

    let id = svc.create(tower_a()).unwrap();
    assert_eq!(store.count(), 1);
    assert_eq!(store.get(id.as_str()).unwrap().name, "tower-a");
}

#[test]
fn test_stored_id_always_matches_name() {
    let svc = BuildingService::default();
    for name in ["a", "b", "c d", "  e  "] {
        svc.create(NewBuilding::new(name, "", vec![])).unwrap();
    }
    for rec in svc.get_all().unwrap() {
        assert_eq!(rec.id, BuildingId::from_name(&rec.name));
    }
}

#[test]
fn test_record_json_shape() {
    let svc = BuildingService::default();
    let id = svc.create(NewBuilding::new("shed", "", vec![])).unwrap();
    let rec = svc.get(id.as_str()).unwrap();

    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["name"], "shed");
    assert!(json.get("address").is_none());
    assert!(json.get("floors").is_none());
    assert!(json.get("modified").is_none());
    assert!(json["created"].as_str().unwrap().contains('T'));
}
