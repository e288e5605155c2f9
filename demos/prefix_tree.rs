use datastructs::builder::Build;
use datastructs::PrefixTree;

fn main() -> anyhow::Result<()> {
    let words = ["tea", "ten", "inn", "in", "to"].map(String::from);
    let tree = PrefixTree::from_items(words)?;

    assert_eq!(tree.len(), 5);
    for query in ["te", "tea", "i", "x"] {
        println!(
            "{query:>3}: word = {}, prefix = {}",
            tree.contains(query),
            tree.contains_prefix(query)
        );
    }
    Ok(())
}
