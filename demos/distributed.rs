use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::{rng, Rng};
use snowflake_idgen::SnowflakeIdGenerator;

fn main() {
    // Each thread plays a separate node; one more generator is shared by all of them
    let shared = Arc::new(SnowflakeIdGenerator::new(0, 0).unwrap());
    let mut handles = vec![];

    for worker_id in 1..=4u32 {
        let shared = Arc::clone(&shared);
        handles.push(thread::spawn(move || {
            let own = SnowflakeIdGenerator::new(1, worker_id).unwrap();
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = own.next_id().unwrap();
                let shared_id = shared.next_id().unwrap();
                let parts = own.extract().decompose(id);

                println!(
                    "Worker {} generated ID {} (ts={}, dc={}, worker={}, seq={})",
                    worker_id, i, parts.timestamp, parts.data_center_id, parts.worker_id, parts.sequence
                );

                assert!(ids.insert(id), "Duplicate ID generated!");
                assert!(ids.insert(shared_id), "Duplicate ID generated!");

                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        let thread_ids = handle.join().unwrap();
        let before = all_ids.len();
        let added = thread_ids.len();
        all_ids.extend(thread_ids);
        assert_eq!(all_ids.len(), before + added, "IDs collided across workers!");
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
}
