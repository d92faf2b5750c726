//! CLI command implementations.

use mpm_io::{build_domain, validate_input, SetupInput, SetupSummary};
use mpm_material::MaterialRegistry;

/// Run the setup lifecycle for every solid in a file.
pub fn setup(config_path: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let input = SetupInput::from_path(config_path)?;
    let (_registry, domain) = build_domain(&input)?;
    let summary = SetupSummary::from_domain(&domain);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("MPM Solid Setup");
    println!("───────────────");
    println!("Config: {config_path}");
    println!();

    for solid in &summary.solids {
        println!("Solid {}", solid.id);
        println!("  EOS:        {}", solid.eos.as_deref().unwrap_or("-"));
        match solid.cell_size {
            Some(h) => println!("  Cell size:  {h}"),
            None => println!("  Cell size:  -"),
        }
        println!("  xlo xhi:    {} {}", solid.lo[0], solid.hi[0]);
        println!("  ylo yhi:    {} {}", solid.lo[1], solid.hi[1]);
        println!("  zlo zhi:    {} {}", solid.lo[2], solid.hi[2]);
        println!(
            "  Nodes:      {} x {} x {}",
            solid.nodes[0], solid.nodes[1], solid.nodes[2]
        );
        println!("  Particles:  {}", solid.np);
        println!("  Fields:     {}", solid.allocations);
        println!();
    }

    println!("Total particles: {}", summary.total_particles);
    println!(
        "Particle memory: {:.2} MiB",
        summary.allocated_bytes as f64 / (1024.0 * 1024.0)
    );
    Ok(())
}

/// Validate a setup file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("MPM Setup Validator");
    println!("───────────────────");
    println!();

    let input = SetupInput::from_path(path)?;
    validate_input(&input)?;
    println!(
        "✅ Setup is valid ({} EOS, {} solids).",
        input.eos.len(),
        input.solid.len()
    );
    Ok(())
}

/// List the built-in EOS presets.
pub fn list_eos() -> Result<(), Box<dyn std::error::Error>> {
    let registry = MaterialRegistry::with_defaults();
    println!("{:<14} {:<12} {:>10} {:>12}", "NAME", "KIND", "RHO0", "K");
    for (_, name, model) in registry.iter() {
        println!(
            "{:<14} {:<12} {:>10.1} {:>12.3e}",
            name,
            model.name(),
            model.rho0(),
            model.bulk_modulus()
        );
    }
    Ok(())
}
