use garage_store::{CarStore, Filter, InMemoryStorage};
use proptest::prelude::*;
use proptest::sample::Index;

// Years in this range are valid regardless of the current calendar year.
fn entry() -> impl Strategy<Value = (String, String, i32, String)> {
    (
        "[A-Za-z]{1,12}",
        "[A-Za-z0-9]{1,12}",
        1950..2025i32,
        "[A-Za-z]{1,10}",
    )
}

fn populated_store(
    entries: &[(String, String, i32, String)],
    toggles: &[Index],
) -> (CarStore<InMemoryStorage>, InMemoryStorage) {
    let storage = InMemoryStorage::new();
    let mut store = CarStore::new(storage.clone());
    for (brand, model, year, color) in entries {
        store.add(brand, model, *year, color).unwrap();
    }
    if !entries.is_empty() {
        for toggle in toggles {
            let id = store.cars()[toggle.index(store.cars().len())].id;
            store.toggle_sold(id).unwrap();
        }
    }
    (store, storage)
}

proptest! {
    #[test]
    fn snapshot_roundtrip_preserves_every_field(
        entries in prop::collection::vec(entry(), 0..8),
        toggles in prop::collection::vec(any::<Index>(), 0..8),
    ) {
        let (store, storage) = populated_store(&entries, &toggles);
        let reloaded = CarStore::new(storage);
        prop_assert_eq!(reloaded.cars(), store.cars());
    }

    #[test]
    fn filters_partition_the_collection(
        entries in prop::collection::vec(entry(), 0..8),
        toggles in prop::collection::vec(any::<Index>(), 0..8),
    ) {
        let (mut store, _storage) = populated_store(&entries, &toggles);

        store.set_filter(Filter::Available);
        let available = store.filtered().len();
        prop_assert!(store.filtered().iter().all(|car| !car.sold));

        store.set_filter(Filter::Sold);
        let sold = store.filtered().len();
        prop_assert!(store.filtered().iter().all(|car| car.sold));

        store.set_filter(Filter::All);
        prop_assert_eq!(store.filtered().len(), entries.len());
        prop_assert_eq!(available + sold, entries.len());
        prop_assert_eq!(store.available_count(), available);
        prop_assert_eq!(store.sold_count(), sold);
    }

    #[test]
    fn delete_removes_one_and_only_one(
        entries in prop::collection::vec(entry(), 1..8),
        victim in any::<Index>(),
    ) {
        let (mut store, _storage) = populated_store(&entries, &[]);
        let id = store.cars()[victim.index(store.cars().len())].id;
        let survivors: Vec<i64> = store
            .cars()
            .iter()
            .map(|car| car.id)
            .filter(|other| *other != id)
            .collect();

        prop_assert!(store.delete(id).unwrap());
        prop_assert_eq!(store.total_count(), entries.len() - 1);
        let remaining: Vec<i64> = store.cars().iter().map(|car| car.id).collect();
        prop_assert_eq!(remaining, survivors);
    }
}
