//! Benchmark fixtures - generated at runtime from AST lines.
//!
//! Fixtures are generated lazily on first access and cached for the
//! duration of the benchmark run. All generation is deterministic.

use sshconfig_core::generate::{GeneratorConfig, generate};
use std::sync::LazyLock;

fn build(config: GeneratorConfig) -> String {
    generate(&config).expect("generated values never contain line terminators")
}

// Lazily generated fixtures (deterministic via default seed)
static SMALL: LazyLock<String> = LazyLock::new(|| build(GeneratorConfig::small()));
static MEDIUM: LazyLock<String> = LazyLock::new(|| build(GeneratorConfig::medium()));
static LARGE: LazyLock<String> = LazyLock::new(|| build(GeneratorConfig::large()));
static XLARGE: LazyLock<String> = LazyLock::new(|| build(GeneratorConfig::xlarge()));
static HUGE: LazyLock<String> = LazyLock::new(|| build(GeneratorConfig::target_bytes(3_000_000)));

/// Standard fixtures for regular benchmarks.
pub fn fixtures() -> &'static [(&'static str, &'static str)] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
        vec![
            ("small", SMALL.as_str()),
            ("medium", MEDIUM.as_str()),
            ("large", LARGE.as_str()),
        ]
    });
    FIXTURES.as_slice()
}

/// Extended fixtures for stress tests.
pub fn fixtures_extended() -> &'static [(&'static str, &'static str)] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
        vec![
            ("small", SMALL.as_str()),
            ("medium", MEDIUM.as_str()),
            ("large", LARGE.as_str()),
            ("xlarge", XLARGE.as_str()),
            ("3mb", HUGE.as_str()),
        ]
    });
    FIXTURES.as_slice()
}

/// Hostnames looked up by the section benchmarks.
pub const HOSTNAMES: &[&str] = &[
    "web.example.com",
    "db-01.internal",
    "10.20.30.40",
    "unmatched.invalid",
];
