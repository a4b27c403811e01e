//! Edge cases across instances and layouts

use crate::tests::test_utils::{assert_unique_ids, FixedClock};
use crate::*;
use std::collections::HashSet;

#[test]
fn test_distinct_nodes_same_millisecond_never_collide() {
    let clock = FixedClock::new(DEFAULT_BASE_EPOCH + 777);
    let mut all_ids = HashSet::new();

    for dc in 0..4 {
        for worker in 0..4 {
            let config = GeneratorConfig::builder()
                .data_center_id(dc)
                .worker_id(worker)
                .build()
                .unwrap();
            let g = SnowflakeIdGenerator::with_time_source(config, &clock).unwrap();
            for _ in 0..50 {
                let id = g.next_id().unwrap();
                assert!(all_ids.insert(id), "Collision from dc {} worker {}", dc, worker);
            }
        }
    }
    assert_eq!(all_ids.len(), 4 * 4 * 50);
}

#[test]
fn test_first_ids_differ_only_in_node_bits() {
    let clock = FixedClock::new(DEFAULT_BASE_EPOCH + 1);
    let a = SnowflakeIdGenerator::with_time_source(
        GeneratorConfig::builder().data_center_id(1).worker_id(2).build().unwrap(),
        &clock,
    )
    .unwrap();
    let b = SnowflakeIdGenerator::with_time_source(
        GeneratorConfig::builder().data_center_id(2).worker_id(1).build().unwrap(),
        &clock,
    )
    .unwrap();

    let (ia, ib) = (a.next_id().unwrap(), b.next_id().unwrap());
    assert_ne!(ia, ib);
    assert_eq!(ia >> 22, ib >> 22);
    assert_eq!(ia & 0xFFF, ib & 0xFFF);
}

#[test]
fn test_max_ids_fill_their_fields() {
    let config = GeneratorConfig::builder()
        .data_center_id(2047)
        .data_center_id_bits(11)
        .worker_id(1023)
        .worker_id_bits(10)
        .build()
        .unwrap();
    let g = SnowflakeIdGenerator::with_config(config).unwrap();
    let id = g.next_id().unwrap();

    assert_eq!(SnowflakeIdGenerator::parse_data_center_id(id, 11), 2047);
    assert_eq!(SnowflakeIdGenerator::parse_worker_id(id, 11, 10), 1023);
    assert!(SnowflakeIdGenerator::parse_sequence(id, 11, 10) <= 1);
}

#[test]
fn test_independent_instances_do_not_share_state() {
    let clock = FixedClock::new(DEFAULT_BASE_EPOCH + 9);
    let a = SnowflakeIdGenerator::with_time_source(GeneratorConfig::default(), &clock).unwrap();
    let b = SnowflakeIdGenerator::with_time_source(GeneratorConfig::default(), &clock).unwrap();

    a.next_id().unwrap();
    a.next_id().unwrap();

    assert_eq!(b.last_timestamp(), None);
    assert_eq!(b.extract().sequence(b.next_id().unwrap()), 0);
}

#[test]
fn test_epoch_at_unix_zero() {
    let config = GeneratorConfig::builder().base_epoch(0).build().unwrap();
    let g = SnowflakeIdGenerator::with_config(config).unwrap();

    let ids: Vec<i64> = (0..100).map(|_| g.next_id().unwrap()).collect();
    assert!(ids.iter().all(|id| *id > 0));
    assert_unique_ids(&ids, 100);
}
