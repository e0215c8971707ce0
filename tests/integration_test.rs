use car_park::car_park::CarParkError;
use car_park::clock::ManualClock;
use car_park::config::Settings;
use car_park::domain::{SlotCategory, SlotId};
use car_park::lifecycle::CarParkSystem;
use car_park::service::ServiceError;
use car_park::validation::ValidationError;
use chrono::Duration;
use std::sync::Arc;

fn settings(staff_slots: u32, visitor_slots: u32) -> Settings {
    Settings {
        staff_slots,
        visitor_slots,
        ..Settings::default()
    }
}

/// Full walk through the system with a real actor and a manual clock.
#[tokio::test]
async fn test_full_car_park_lifecycle() {
    let clock = ManualClock::default();
    let system = CarParkSystem::with_clock(&settings(1, 1), Arc::new(clock.clone()));
    let client = system.client.clone();

    let listing = client.list_all_slots().await.unwrap();
    let ids: Vec<&str> = listing.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["S01", "V01"]);

    client
        .park_car("V01", "ABC123", "Alice", false)
        .await
        .expect("Visitor should park in V01");

    let mismatch = client.park_car("S01", "ABC123", "Alice", false).await;
    assert!(matches!(
        mismatch,
        Err(ServiceError::CarPark(CarParkError::CarCategoryMismatch { .. }))
    ));

    clock.advance(Duration::seconds(3601));
    let location = client.find_car("ABC123").await.unwrap();
    assert_eq!(location.slot_id.as_str(), "V01");
    assert_eq!(location.duration_secs, 3601);
    assert_eq!(location.fee, 10.0);

    let departure = client.remove_car("ABC123").await.unwrap();
    assert_eq!(departure.slot_id.as_str(), "V01");
    assert_eq!(departure.fee, 10.0);

    let after = client.find_car("ABC123").await;
    assert_eq!(
        after,
        Err(ServiceError::CarPark(CarParkError::CarNotFound("ABC123".into())))
    );

    drop(client);
    let car_park = system.shutdown().await.expect("Failed to shutdown system");
    assert_eq!(car_park.occupied_count(), 0);
}

#[tokio::test]
async fn test_slot_management() {
    let system = CarParkSystem::new(&settings(1, 2));
    let client = system.client.clone();

    client.add_slot(SlotCategory::Staff, "S02").await.unwrap();
    assert_eq!(
        client.add_slot(SlotCategory::Staff, "S02").await,
        Err(ServiceError::CarPark(CarParkError::SlotAlreadyExists("S02".into())))
    );
    assert!(matches!(
        client.add_slot(SlotCategory::Staff, "X1").await,
        Err(ServiceError::Validation(ValidationError::SlotIdPattern { .. }))
    ));

    client.park_car("S02", "T2345", "Bob", true).await.unwrap();
    assert_eq!(
        client.delete_slot("S02").await.map(|_| ()),
        Err(ServiceError::CarPark(CarParkError::SlotOccupiedCannotDelete(
            "S02".into()
        )))
    );
    assert!(client.find_slot("S02").await.unwrap().unwrap().is_occupied());

    client.delete_slot("V02").await.unwrap();
    assert!(client.find_slot("V02").await.unwrap().is_none());

    assert_eq!(
        client.available_slots(SlotCategory::Staff).await.unwrap(),
        vec![SlotId::from("S01")]
    );

    let removed = client.delete_all_unoccupied_slots().await.unwrap();
    assert_eq!(removed, 2);
    let remaining: Vec<String> = client
        .list_all_slots()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id.to_string())
        .collect();
    assert_eq!(remaining, vec!["S02".to_string()]);

    drop(client);
    system.shutdown().await.unwrap();
}

/// Vacating by slot id works without knowing the registration.
#[tokio::test]
async fn test_vacate_slot_by_id() {
    let clock = ManualClock::default();
    let system = CarParkSystem::with_clock(&settings(1, 1), Arc::new(clock.clone()));
    let client = system.client.clone();

    client.park_car("S01", "T2345", "Bob", true).await.unwrap();
    clock.advance(Duration::minutes(30));

    let departure = client
        .vacate_slot("S01")
        .await
        .unwrap()
        .expect("S01 was occupied");
    assert_eq!(departure.car.reg_number(), "T2345");
    assert_eq!(departure.duration_secs, 30 * 60);
    assert_eq!(departure.fee, 5.0);

    assert_eq!(client.vacate_slot("S01").await, Ok(None));
    assert_eq!(
        client.vacate_slot("S07").await,
        Err(ServiceError::CarPark(CarParkError::SlotNotFound("S07".into())))
    );
    assert_eq!(
        client.available_slots(SlotCategory::Staff).await.unwrap(),
        vec![SlotId::from("S01")]
    );

    drop(client);
    let car_park = system.shutdown().await.unwrap();
    assert_eq!(car_park.occupied_count(), 0);
}

/// Many tasks racing for the same slots: each slot ends up with exactly one car.
#[tokio::test]
async fn test_concurrent_parking_serialised() {
    let system = CarParkSystem::new(&settings(0, 3));

    let mut handles = vec![];
    for i in 0..10 {
        let client = system.client.clone();
        handles.push(tokio::spawn(async move {
            let slot = format!("V{:02}", i % 3 + 1);
            client
                .park_car(&slot, &format!("CAR{i}"), "Driver", false)
                .await
        }));
    }

    let mut parked = 0;
    let mut occupied = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => parked += 1,
            Err(ServiceError::CarPark(CarParkError::SlotAlreadyOccupied(_))) => occupied += 1,
            Err(e) => panic!("Unexpected error: {e}"),
        }
    }

    assert_eq!(parked, 3, "One car per slot");
    assert_eq!(occupied, 7);

    let car_park = system.shutdown().await.unwrap();
    assert_eq!(car_park.occupied_count(), 3);
}
