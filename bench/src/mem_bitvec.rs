use datastructs::bit_vector::BitVector;
use datastructs::BloomFilter;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

const SEED_POSITIONS: u64 = 113;
const NUM_BITS: usize = 1 << 20;

fn main() {
    show_memories(1.0);
    show_memories(0.5);
    show_memories(0.01);
    show_bloom_memories();
}

fn gen_random_positions(len: usize, p: f64, seed: u64) -> Vec<usize> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..len).filter(|_| rng.gen_bool(p)).collect()
}

fn show_memories(p: f64) {
    let positions = gen_random_positions(NUM_BITS, p, SEED_POSITIONS);
    println!("[p = {p}]");

    let bytes = {
        let mut bv = BitVector::new(NUM_BITS);
        for &pos in &positions {
            bv.set(pos, true).unwrap();
        }
        bv.num_words()
    };
    print_memory("BitVector (presized)", bytes);

    let bytes = {
        let mut bv = BitVector::new(1);
        for &pos in &positions {
            bv.set(pos, true).unwrap();
        }
        bv.num_words()
    };
    print_memory("BitVector (grown)", bytes);
}

fn show_bloom_memories() {
    for rate in [0.1, 0.01, 0.001] {
        let filter = BloomFilter::with_rate(NUM_BITS, rate).unwrap();
        println!(
            "BloomFilter (rate = {rate}): {:.3} bits per item, {} hashes",
            filter.bit_vector().len() as f64 / NUM_BITS as f64,
            filter.num_hashes()
        );
    }
}

fn print_memory(name: &str, bytes: usize) {
    println!(
        "{}: {:.3} bits per bit",
        name,
        (bytes * 8) as f64 / NUM_BITS as f64
    );
}
