use snowflake_idgen::{GeneratorConfig, SnowflakeIdGenerator};

fn main() {
    // 3 data centers bits, 7 worker bits: 8 x 128 nodes, 4096 ids/ms each
    let config = GeneratorConfig::builder()
        .data_center_id(5)
        .data_center_id_bits(3)
        .worker_id(100)
        .worker_id_bits(7)
        .base_epoch(1_704_067_200_000) // 2024-01-01 UTC
        .build()
        .unwrap();

    let generator = SnowflakeIdGenerator::with_config(config).unwrap();

    println!("Generator configuration:");
    println!("  Data-center bits: {}", generator.data_center_id_bits());
    println!("  Worker bits: {}", generator.worker_id_bits());
    println!("  Sequence bits: {}", generator.sequence_bits());
    println!("  Max data-center ID: {}", generator.max_data_center_id());
    println!("  Max worker ID: {}", generator.max_worker_id());
    println!("  Max sequence per ms: {}", generator.max_sequence());

    let id = generator.next_id().unwrap();
    let parts = generator.extract().decompose(id);

    println!("\nGenerated ID: {}", id);
    println!("Components:");
    println!("  Timestamp: {} ms since Unix epoch", parts.timestamp);
    println!("  Data-center ID: {} (of {})", parts.data_center_id, generator.max_data_center_id());
    println!("  Worker ID: {} (of {})", parts.worker_id, generator.max_worker_id());
    println!("  Sequence: {} (of {})", parts.sequence, generator.max_sequence());

    // Widths that leave no room for the sequence are rejected up front
    let err = GeneratorConfig::builder()
        .data_center_id_bits(11)
        .worker_id_bits(11)
        .build()
        .unwrap_err();
    println!("\nRejected layout: {err}");
}
