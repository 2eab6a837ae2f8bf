use anyhow::Result;
use sympatric_kernel::{EngineConfig, KernelStrategyRegistry};

/// Print the configuration after file loading and flag overrides.
pub fn show_config(config: &EngineConfig) -> Result<()> {
    println!("{}", config.to_json()?);
    Ok(())
}

pub fn list_strategies(config: &EngineConfig) -> Result<()> {
    let registry = KernelStrategyRegistry::new(config.kernel.strategy);
    let current = registry.get_kernel_strategy().name();
    for name in registry.available() {
        if name == current {
            println!("{name} (default)");
        } else {
            println!("{name}");
        }
    }
    Ok(())
}
