use crate::targets::TargetRegistry;

pub fn run_list_targets() -> anyhow::Result<()> {
    let registry = TargetRegistry::new();

    println!("Supported targets:");
    for target in registry.get_all_targets() {
        println!("  • {target}");
    }

    Ok(())
}
