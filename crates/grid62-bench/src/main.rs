//! Throughput benchmark for GRid encode/decode.
//!
//! Generates a batch of random v4 UUIDs and measures both directions of
//! the codec.

use std::time::Instant;

use uuid::Uuid;

const BATCH_SIZE: usize = 1_000_000;
const DECODE_ITERS: u32 = 5;

fn main() {
    println!("Generating {} random UUIDs", BATCH_SIZE);
    let generate_start = Instant::now();
    let ids: Vec<Uuid> = (0..BATCH_SIZE).map(|_| Uuid::new_v4()).collect();
    println!("Generated in {:?}", generate_start.elapsed());

    // =========================================================================
    // ENCODE
    // =========================================================================

    let encode_start = Instant::now();
    let grids: Vec<String> = ids
        .iter()
        .map(|id| grid62::encode_uuid(id, "bench"))
        .collect();
    let encode_time = encode_start.elapsed();

    println!(
        "Encoded {} GRids in {:?} ({:.2}M ops/sec)",
        grids.len(),
        encode_time,
        BATCH_SIZE as f64 / encode_time.as_secs_f64() / 1_000_000.0
    );
    println!(
        "Sample: {} -> {}",
        ids[0].as_hyphenated(),
        grids[0]
    );

    // =========================================================================
    // DECODE
    // =========================================================================

    let decode_start = Instant::now();
    let mut checksum = 0u64;
    for _ in 0..DECODE_ITERS {
        for grid in &grids {
            let id = grid62::decode_uuid(grid).expect("bench GRid decodes");
            checksum = checksum.wrapping_add(id.as_u128() as u64);
        }
    }
    let decode_time = decode_start.elapsed() / DECODE_ITERS;

    println!(
        "Decoded {} GRids in {:?} ({:.2}M ops/sec, checksum {:x})",
        grids.len(),
        decode_time,
        BATCH_SIZE as f64 / decode_time.as_secs_f64() / 1_000_000.0,
        checksum
    );

    // Every decode must round-trip exactly
    for (id, grid) in ids.iter().zip(&grids) {
        assert_eq!(grid62::decode_uuid(grid).expect("round-trip"), *id);
    }
    println!("Round-trip verified for all {} identifiers", BATCH_SIZE);
}
