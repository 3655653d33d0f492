use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use subtrack_core::storage::SUBSCRIPTIONS_SLOT;
use subtrack_core::{
    BillingCycle, Category, FileSlotStore, LoadSource, Status, Subscription, SubscriptionFilter,
    SubscriptionId, SubscriptionStore, Upsert,
};

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let dirname = format!("{}_{}_{}", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(dirname);
        Self { path }
    }

    fn slot_file(&self) -> PathBuf {
        self.path.join(format!("{}.json", SUBSCRIPTIONS_SLOT))
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_first_run_seeds_then_persists_on_first_change() {
    let temp = TempDir::new("subtrack_first_run");

    let mut store = SubscriptionStore::open(FileSlotStore::new(&temp.path));
    assert_eq!(store.load_source(), &LoadSource::SeededMissing);
    assert_eq!(store.subscriptions().len(), 8);
    assert!(!temp.slot_file().exists());

    let figma = Subscription::new(
        "Figma",
        Category::Software,
        dec!(15),
        BillingCycle::Monthly,
        date(2024, 4, 1),
    );
    let outcome = store.add_or_update(figma.clone()).expect("save should succeed");
    assert_eq!(outcome, Upsert::Added);
    assert!(temp.slot_file().exists());

    let reopened = SubscriptionStore::open(FileSlotStore::new(&temp.path));
    assert_eq!(reopened.load_source(), &LoadSource::Stored);
    assert_eq!(reopened.subscriptions().len(), 9);
    assert_eq!(reopened.subscriptions().last(), Some(&figma));
}

#[test]
fn test_corrupt_file_falls_back_without_overwriting() {
    let temp = TempDir::new("subtrack_corrupt");
    fs::create_dir_all(&temp.path).expect("create dir");
    fs::write(temp.slot_file(), "{ definitely not a list").expect("write corrupt slot");

    let store = SubscriptionStore::open(FileSlotStore::new(&temp.path));
    assert!(matches!(store.load_source(), LoadSource::SeededCorrupt(_)));
    assert_eq!(store.subscriptions().len(), 8);

    let on_disk = fs::read_to_string(temp.slot_file()).expect("read slot");
    assert_eq!(on_disk, "{ definitely not a list");
}

#[test]
fn test_reads_documents_with_timestamp_start_dates() {
    let temp = TempDir::new("subtrack_timestamps");
    fs::create_dir_all(&temp.path).expect("create dir");
    let document = r#"[
        {"id":"a","name":"Netflix","category":"Streaming","price":19.99,
         "billingCycle":"monthly","startDate":"2023-01-15T00:00:00.000Z",
         "status":"active","paymentCardType":"","notes":""}
    ]"#;
    fs::write(temp.slot_file(), document).expect("write slot");

    let store = SubscriptionStore::open(FileSlotStore::new(&temp.path));
    assert_eq!(store.load_source(), &LoadSource::Stored);
    let netflix = store.get(&SubscriptionId::from("a")).expect("record a");
    assert_eq!(netflix.start_date, date(2023, 1, 15));
    assert_eq!(netflix.payment_card_type, None);
    assert_eq!(netflix.notes, None);
}

#[test]
fn test_edit_and_remove_survive_reopen() {
    let temp = TempDir::new("subtrack_edit_remove");

    let mut store = SubscriptionStore::open(FileSlotStore::new(&temp.path));
    let spotify_id = SubscriptionId::from("2");
    let mut spotify = store.get(&spotify_id).expect("seed record 2").clone();
    spotify.status = Status::Cancelled;
    store.add_or_update(spotify).expect("update should save");
    assert!(store.remove(&SubscriptionId::from("8")).expect("remove should save"));

    let reopened = SubscriptionStore::open(FileSlotStore::new(&temp.path));
    assert_eq!(reopened.subscriptions().len(), 7);
    assert_eq!(
        reopened.get(&spotify_id).map(|s| s.status),
        Some(Status::Cancelled)
    );

    let cancelled = reopened.apply_filter(&SubscriptionFilter::new().status(Status::Cancelled));
    let names: Vec<&str> = cancelled.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Spotify Family", "Adobe Creative Cloud"]);
}
