//! `cryochat sections` — List the sections the assistant can cite.

use cryochat_knowledge::ContentStore;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = ContentStore::thesis();

    if json {
        println!("{}", serde_json::to_string_pretty(store.sections())?);
        return Ok(());
    }

    println!("📚 Thesis Sections ({})", store.len());
    println!("====================");
    for section in store.sections() {
        println!();
        println!("  {}", section.title);
        println!("    id:        {}", section.id);
        println!("    location:  {}, p.{}", section.chapter(), section.page_start);
        println!("    keywords:  {}", section.keywords.join(", "));
    }

    Ok(())
}
