use datastructs::bit_vector::*;

fn main() -> anyhow::Result<()> {
    let mut v = BitVector::new(8);
    v.set(0, true)?;
    v.set(17, true)?;

    assert_eq!(v.num_words(), 3);
    assert_eq!(v.get_int(17)?, 1);
    println!("v      = {v}");
    println!("!v     = {}", not(&v));
    println!("v | !v = {}", or(&v, &not(&v)));
    Ok(())
}
