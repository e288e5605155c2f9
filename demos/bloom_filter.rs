use datastructs::BloomFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut filter = BloomFilter::with_rate(1000, 0.01)?;
    for i in 0..1000u32 {
        filter.insert(&i);
    }
    let false_positives = (1000..11_000u32).filter(|i| filter.contains(i)).count();

    println!("fill ratio: {:.3}", filter.fill_ratio());
    println!("false positives: {false_positives} / 10000");
    Ok(())
}
