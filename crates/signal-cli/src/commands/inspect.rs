use crate::Cli;
use anyhow::Result;
use signal_score::is_reachable;

pub fn run(cli: &Cli) -> Result<()> {
    let path = cli.ontology_path();
    if !path.exists() {
        anyhow::bail!(
            "No ontology found at {}. Pass --ontology or set SIGNAL_ONTOLOGY.",
            path.display()
        );
    }

    let file_size = std::fs::metadata(path)?.len();
    let ontology = cli.load_ontology()?;

    let total_phrases: usize = ontology.domains().map(|d| d.phrases().len()).sum();
    let dangling = ontology.dangling_references();
    let unreachable: Vec<(&str, &str)> = ontology
        .domains()
        .flat_map(|d| {
            d.keywords()
                .iter()
                .filter(|kw| !is_reachable(kw))
                .map(move |kw| (d.name(), kw.as_str()))
        })
        .collect();

    println!("Ontology: {}", path.display());
    println!("Size: {:.1} KB ({} bytes)", file_size as f64 / 1024.0, file_size);
    println!("Signal domains: {}", ontology.domain_count());
    println!("Occupational groups: {}", ontology.group_count());
    println!("Phrases: {total_phrases}");
    println!("Unique keywords: {}", ontology.vocabulary().len());
    println!();

    // Domains by keyword count
    let mut sorted_domains: Vec<(&str, usize)> = ontology
        .domains()
        .map(|d| (d.name(), d.keywords().len()))
        .collect();
    sorted_domains.sort_by(|a, b| b.1.cmp(&a.1));

    println!("Domains by keyword count:");
    for (name, count) in sorted_domains.iter().take(15) {
        println!("  {name:<36} {count:>6}");
    }
    if sorted_domains.len() > 15 {
        let rest: usize = sorted_domains[15..].iter().map(|(_, c)| c).sum();
        println!("  (other)                              {rest:>6}");
    }
    println!();

    println!("Groups:");
    for group in ontology.groups() {
        let keywords = ontology.group_keywords(group).len();
        println!(
            "  {:<36} {:>2} domains {:>5} keywords",
            group.name(),
            group.domains().len(),
            keywords
        );
    }

    if !dangling.is_empty() {
        println!();
        println!("Unknown domain references:");
        for (group, domain) in dangling {
            println!("  {group} -> {domain}");
        }
    }

    if !unreachable.is_empty() {
        println!();
        println!("Unreachable keywords (never produced by normalization):");
        for (domain, keyword) in unreachable {
            println!("  {domain}: {keyword}");
        }
    }

    Ok(())
}
