//! # Car Park Client
//!
//! The interface half of the service. A [`CarParkClient`] holds only a channel
//! sender, so it is cheap to clone and hand to every task that needs the car
//! park. Each method validates its input, sends one request and awaits the
//! reply.

use super::error::ServiceError;
use super::message::CarParkRequest;
use crate::car_park::{CarLocation, CarParkError, Departure};
use crate::domain::{Car, ParkingSlot, SlotCategory, SlotId, SlotStatus};
use crate::validation;
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CarParkClient {
    sender: mpsc::Sender<CarParkRequest>,
}

impl CarParkClient {
    pub fn new(sender: mpsc::Sender<CarParkRequest>) -> Self {
        Self { sender }
    }

    /// Sends the request built by `make` and waits for the reply.
    async fn call<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> CarParkRequest,
    ) -> Result<T, ServiceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| ServiceError::ActorClosed)?;
        response.await.map_err(|_| ServiceError::ActorDropped)
    }

    /// Like [`call`](Self::call) for requests the car park itself can refuse.
    async fn try_call<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<Result<T, CarParkError>>) -> CarParkRequest,
    ) -> Result<T, ServiceError> {
        Ok(self.call(make).await??)
    }

    /// Adds a new empty slot. The id must follow the `S01` / `V01` convention
    /// for its category.
    #[instrument(skip(self))]
    pub async fn add_slot(
        &self,
        category: SlotCategory,
        slot_id: &str,
    ) -> Result<(), ServiceError> {
        let slot_id = validation::slot_id_for(category, slot_id)?;
        debug!("Sending request");
        let slot = ParkingSlot::new(slot_id, category);
        self.try_call(|respond_to| CarParkRequest::AddSlot { slot, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_slot(&self, slot_id: &str) -> Result<ParkingSlot, ServiceError> {
        let slot_id = SlotId(validation::non_blank("Slot ID", slot_id)?);
        debug!("Sending request");
        self.try_call(|respond_to| CarParkRequest::DeleteSlot {
            slot_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn find_slot(&self, slot_id: &str) -> Result<Option<ParkingSlot>, ServiceError> {
        let slot_id = SlotId(validation::non_blank("Slot ID", slot_id)?);
        debug!("Sending request");
        self.call(|respond_to| CarParkRequest::FindSlot {
            slot_id,
            respond_to,
        })
        .await
    }

    /// Parks a new car and returns the time it was parked at.
    #[instrument(skip(self))]
    pub async fn park_car(
        &self,
        slot_id: &str,
        reg_number: &str,
        owner: &str,
        is_staff: bool,
    ) -> Result<DateTime<Utc>, ServiceError> {
        let slot_id = SlotId(validation::non_blank("Slot ID", slot_id)?);
        let reg_number = validation::non_blank("Registration number", reg_number)?;
        let owner = validation::non_blank("Owner name", owner)?;
        debug!("Sending request");
        let car = Car::new(reg_number, owner, is_staff);
        self.try_call(|respond_to| CarParkRequest::ParkCar {
            slot_id,
            car,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove_car(&self, reg_number: &str) -> Result<Departure, ServiceError> {
        let reg_number = validation::non_blank("Registration number", reg_number)?;
        debug!("Sending request");
        self.try_call(|respond_to| CarParkRequest::RemoveCar {
            reg_number,
            respond_to,
        })
        .await
    }

    /// Empties the slot with id `slot_id`, whoever is parked there.
    ///
    /// # Returns
    /// The departure of the car that was parked, or `None` when the slot was
    /// already vacant.
    #[instrument(skip(self))]
    pub async fn vacate_slot(&self, slot_id: &str) -> Result<Option<Departure>, ServiceError> {
        let slot_id = SlotId(validation::non_blank("Slot ID", slot_id)?);
        debug!("Sending request");
        self.try_call(|respond_to| CarParkRequest::VacateSlot {
            slot_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn find_car(&self, reg_number: &str) -> Result<CarLocation, ServiceError> {
        let reg_number = validation::non_blank("Registration number", reg_number)?;
        debug!("Sending request");
        self.try_call(|respond_to| CarParkRequest::FindCar {
            reg_number,
            respond_to,
        })
        .await
    }

    /// Returns how many slots were deleted.
    #[instrument(skip(self))]
    pub async fn delete_all_unoccupied_slots(&self) -> Result<usize, ServiceError> {
        debug!("Sending request");
        self.call(|respond_to| CarParkRequest::DeleteAllUnoccupied { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_all_slots(&self) -> Result<Vec<SlotStatus>, ServiceError> {
        debug!("Sending request");
        self.call(|respond_to| CarParkRequest::ListAll { respond_to })
            .await
    }

    /// Vacant slots that a car of `category` could park in right now.
    #[instrument(skip(self))]
    pub async fn available_slots(
        &self,
        category: SlotCategory,
    ) -> Result<Vec<SlotId>, ServiceError> {
        debug!("Sending request");
        self.call(|respond_to| CarParkRequest::Available {
            category,
            respond_to,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    /// Client whose actor is never started; requests queue until received.
    fn detached_client() -> (CarParkClient, mpsc::Receiver<CarParkRequest>) {
        let (sender, receiver) = mpsc::channel(4);
        (CarParkClient::new(sender), receiver)
    }

    #[tokio::test]
    async fn test_blank_registration_never_reaches_actor() {
        let (client, mut receiver) = detached_client();

        let result = client.park_car("V01", "   ", "Alice", false).await;

        assert_eq!(
            result,
            Err(ServiceError::Validation(ValidationError::Blank {
                field: "Registration number"
            }))
        );
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_bad_slot_id_pattern_rejected() {
        let (client, mut receiver) = detached_client();

        let result = client.add_slot(SlotCategory::Visitor, "S01").await;

        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::SlotIdPattern { .. }))
        ));
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_park_request_carries_trimmed_fields() {
        let (client, mut receiver) = detached_client();

        let call = tokio::spawn(async move {
            client
                .park_car(" V01 ", " ABC123 ", " Alice ", false)
                .await
        });

        match receiver.recv().await.expect("Expected ParkCar request") {
            CarParkRequest::ParkCar {
                slot_id,
                car,
                respond_to,
            } => {
                assert_eq!(slot_id.as_str(), "V01");
                assert_eq!(car.reg_number(), "ABC123");
                assert_eq!(car.owner(), "Alice");
                assert!(!car.is_staff());
                respond_to
                    .send(Err(CarParkError::SlotAlreadyOccupied("V01".into())))
                    .unwrap();
            }
            other => panic!("Expected ParkCar, got {other:?}"),
        }

        let result = call.await.unwrap();
        assert_eq!(
            result,
            Err(ServiceError::CarPark(CarParkError::SlotAlreadyOccupied(
                "V01".into()
            )))
        );
    }

    #[tokio::test]
    async fn test_vacate_request_carries_trimmed_slot_id() {
        let (client, mut receiver) = detached_client();

        let call = tokio::spawn(async move { client.vacate_slot(" V01 ").await });

        match receiver.recv().await.expect("Expected VacateSlot request") {
            CarParkRequest::VacateSlot {
                slot_id,
                respond_to,
            } => {
                assert_eq!(slot_id.as_str(), "V01");
                respond_to.send(Ok(None)).unwrap();
            }
            other => panic!("Expected VacateSlot, got {other:?}"),
        }

        assert_eq!(call.await.unwrap(), Ok(None));
    }

    #[tokio::test]
    async fn test_blank_slot_id_not_vacated() {
        let (client, mut receiver) = detached_client();

        let result = client.vacate_slot("  ").await;

        assert_eq!(
            result,
            Err(ServiceError::Validation(ValidationError::Blank {
                field: "Slot ID"
            }))
        );
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_closed_actor_reported() {
        let (client, receiver) = detached_client();
        drop(receiver);

        assert_eq!(client.list_all_slots().await, Err(ServiceError::ActorClosed));
    }

    #[tokio::test]
    async fn test_dropped_responder_reported() {
        let (client, mut receiver) = detached_client();

        let call = tokio::spawn(async move { client.delete_all_unoccupied_slots().await });
        let request = receiver.recv().await.expect("Expected request");
        drop(request);

        assert_eq!(call.await.unwrap(), Err(ServiceError::ActorDropped));
    }
}
