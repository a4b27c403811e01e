use snowflake_idgen::{SimpleIdGenerator, SnowflakeIdGenerator};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Data-center 1, worker 2, default 5 + 5 bit widths
    let generator = SnowflakeIdGenerator::new(1, 2).unwrap();

    let id1 = generator.next_id().unwrap();
    let id2 = generator.next_id().unwrap();
    let id3 = generator.next_id().unwrap();

    println!("Generated IDs (guaranteed to be increasing):");
    for id in [id1, id2, id3] {
        print_id(id, &generator);
    }

    // Decoding only needs the widths and epoch used at generation
    println!("\nComponents of ID2 (static decoders):");
    println!(
        "  Timestamp: {}",
        SnowflakeIdGenerator::parse_timestamp(id2, generator.base_epoch())
    );
    println!(
        "  Data-center ID: {}",
        SnowflakeIdGenerator::parse_data_center_id(id2, 5)
    );
    println!(
        "  Worker ID: {}",
        SnowflakeIdGenerator::parse_worker_id(id2, 5, 5)
    );

    println!("\nSimple id: {}", SimpleIdGenerator::new().new_id());
}

fn print_id(id: i64, generator: &SnowflakeIdGenerator) {
    let parts = generator.extract().decompose(id);
    let datetime = generator.extract().datetime(id).unwrap();

    println!(
        "  ID: {id}, Timestamp: {}, Human date: {datetime}, DC: {}, Worker: {}, Sequence: {}",
        parts.timestamp, parts.data_center_id, parts.worker_id, parts.sequence
    );
}
