use chrono::Utc;

use crate::car::Car;
use crate::filter::Filter;
use crate::storage::StorageBackend;

use super::{current_year, snapshot, CarDraft, StoreError, ValidationError};

/// Key the snapshot is stored under in the backend.
pub const STORAGE_KEY: &str = "car_list_items_v1";

/// Earliest accepted model year.
const MIN_YEAR: i32 = 1950;

/// The garage tracker core.
///
/// Owns the newest-first list of records and persists the full snapshot
/// through the injected backend after every mutating operation. Loading is
/// soft: a missing or malformed snapshot yields an empty garage, never an
/// error.
pub struct CarStore<S: StorageBackend> {
    storage: S,
    cars: Vec<Car>,
    filter: Filter,
    draft: CarDraft,
    error: Option<ValidationError>,
}

impl<S: StorageBackend> CarStore<S> {
    /// Open a store over `storage`, loading whatever snapshot it holds.
    pub fn new(storage: S) -> Self {
        let cars = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => snapshot::decode(&raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("snapshot load failed, starting empty: {}", err);
                Vec::new()
            }
        };
        CarStore {
            storage,
            cars,
            filter: Filter::All,
            draft: CarDraft::new(),
            error: None,
        }
    }

    /// Validate and insert a new record at the front of the list.
    ///
    /// A rejection leaves the list and the persisted snapshot untouched and
    /// records the user-visible message readable via [`error_message`].
    ///
    /// [`error_message`]: CarStore::error_message
    pub fn add(
        &mut self,
        brand: &str,
        model: &str,
        year: i32,
        color: &str,
    ) -> Result<&Car, StoreError> {
        self.error = None;

        let brand = brand.trim();
        let model = model.trim();
        let color = color.trim();

        if brand.is_empty() || model.is_empty() || color.is_empty() {
            return Err(self.reject(ValidationError::MissingFields));
        }

        let max_year = current_year() + 1;
        if year < MIN_YEAR || year > max_year {
            return Err(self.reject(ValidationError::YearOutOfRange { max: max_year }));
        }

        let car = Car {
            id: self.next_id(),
            brand: brand.to_string(),
            model: model.to_string(),
            year,
            color: color.to_string(),
            sold: false,
        };
        self.cars.insert(0, car); // newest first
        self.persist()?;
        Ok(&self.cars[0])
    }

    /// Submit the draft: parse it, [`add`] the record, and reset the form on
    /// success (year back to the current calendar year).
    ///
    /// [`add`]: CarStore::add
    pub fn submit(&mut self) -> Result<&Car, StoreError> {
        let year = match self.draft.parsed_year() {
            Some(year) => year,
            None => {
                self.error = None;
                return Err(self.reject(ValidationError::MissingFields));
            }
        };
        let draft = self.draft.clone();
        self.add(&draft.brand, &draft.model, year, &draft.color)
            .map(|_| ())?;
        self.draft = CarDraft::new();
        Ok(&self.cars[0])
    }

    /// Invert the sold flag on the record with `id`.
    ///
    /// Returns whether a record matched. An absent id leaves the list
    /// unchanged; the snapshot is rewritten either way.
    pub fn toggle_sold(&mut self, id: i64) -> Result<bool, StoreError> {
        let mut matched = false;
        for car in &mut self.cars {
            if car.id == id {
                car.sold = !car.sold;
                matched = true;
            }
        }
        self.persist()?;
        Ok(matched)
    }

    /// Remove the record with `id`. Returns whether a record matched.
    pub fn delete(&mut self, id: i64) -> Result<bool, StoreError> {
        let before = self.cars.len();
        self.cars.retain(|car| car.id != id);
        let matched = self.cars.len() != before;
        self.persist()?;
        Ok(matched)
    }

    /// Empty the garage and remove the persisted snapshot entirely (a
    /// subsequent load sees an absent snapshot, not an empty array).
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.cars.clear();
        self.storage.remove(STORAGE_KEY)?;
        Ok(())
    }

    /// Select the active view. No persistence side effect.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Every record, newest first.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// The records visible under the active filter, relative order preserved.
    pub fn filtered(&self) -> Vec<&Car> {
        self.cars
            .iter()
            .filter(|car| self.filter.matches(car))
            .collect()
    }

    /// Count over the full list, regardless of the active filter.
    pub fn total_count(&self) -> usize {
        self.cars.len()
    }

    pub fn available_count(&self) -> usize {
        self.cars.iter().filter(|car| !car.sold).count()
    }

    pub fn sold_count(&self) -> usize {
        self.cars.iter().filter(|car| car.sold).count()
    }

    /// The transient form input.
    pub fn draft(&self) -> &CarDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CarDraft {
        &mut self.draft
    }

    /// The user-visible message from the last rejected add, if any. Cleared
    /// at the start of the next add or submit attempt.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|err| err.to_string())
    }

    fn reject(&mut self, error: ValidationError) -> StoreError {
        self.error = Some(error.clone());
        StoreError::Validation(error)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let raw = snapshot::encode(&self.cars).map_err(|err| StoreError::Serde(err.to_string()))?;
        self.storage.set(STORAGE_KEY, &raw)?;
        log::debug!("persisted {} cars", self.cars.len());
        Ok(())
    }

    /// Creation-timestamp id, bumped past the current maximum so two adds
    /// within the same millisecond stay unique.
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.cars.iter().map(|car| car.id).max() {
            Some(max) if max >= now => max + 1,
            _ => now,
        }
    }
}
