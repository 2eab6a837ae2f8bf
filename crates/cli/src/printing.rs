use std::time::Duration;
use sympatric_kernel::{KernelStrategy, STRATEGY_TOLERANCE};

pub struct StrategyTiming {
    pub strategy: KernelStrategy,
    pub elapsed: Duration,
    pub max_rel_diff: f64,
    pub agrees: bool,
}

pub fn print_comparison(n: usize, sigma: f64, rows: &[StrategyTiming]) {
    println!("\n⚖️  Kernel Strategy Comparison");
    println!("  • Community size: {n}");
    println!("  • Sigma: {sigma}");
    println!("  • Tolerance: {STRATEGY_TOLERANCE:e} (relative, against naive)");
    println!("{}", "=".repeat(60));
    println!(
        "{:<18} {:>14} {:>16} {:>8}",
        "strategy", "time", "max rel diff", "agrees"
    );

    // Speedup is relative to the first row, which is always naive.
    let reference = rows.first().map(|r| r.elapsed.as_secs_f64());
    for row in rows {
        let secs = row.elapsed.as_secs_f64();
        let speedup = match reference {
            Some(base) if secs > 0.0 => format!(" ({:.1}x)", base / secs),
            _ => String::new(),
        };
        println!(
            "{:<18} {:>14} {:>16.3e} {:>8}{}",
            row.strategy.name(),
            format!("{:.3?}", row.elapsed),
            row.max_rel_diff,
            if row.agrees { "✓" } else { "✗" },
            speedup
        );
    }
}
