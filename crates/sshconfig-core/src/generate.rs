//! Random ssh_config generation for benchmarking and testing.
//!
//! Lines are built from the AST types and the argument encoder, so the
//! output always parses.

use crate::document::Document;
use crate::parse::{EncodeError, Line, encode_arguments};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Configuration for generating ssh_config files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of `Host` sections to generate.
    pub num_hosts: usize,
    /// Number of comment lines to generate.
    pub num_comments: usize,
    /// Maximum directives per section.
    pub max_directives_per_host: usize,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_hosts: 50,
            num_comments: 10,
            max_directives_per_host: 6,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with specified hosts and proportional comments.
    ///
    /// Comments are set to ~20% of hosts (minimum 0).
    pub fn new(num_hosts: usize) -> Self {
        Self {
            num_hosts,
            num_comments: num_hosts / 5,
            ..Default::default()
        }
    }

    /// Small fixture (~10 hosts).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 hosts).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 hosts).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Extra large fixture (~10k hosts).
    pub fn xlarge() -> Self {
        Self::new(10_000)
    }

    /// Generate a file targeting approximately the given byte size.
    pub fn target_bytes(bytes: usize) -> Self {
        // Average section is ~110 bytes
        Self::new(bytes.saturating_div(110).max(1))
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of comments explicitly.
    pub fn with_comments(mut self, num_comments: usize) -> Self {
        self.num_comments = num_comments;
        self
    }

    /// Set the maximum directives per section.
    pub fn with_max_directives(mut self, max: usize) -> Self {
        self.max_directives_per_host = max.max(1);
        self
    }
}

/// Vocabulary for generating realistic hosts and directives.
mod vocabulary {
    pub const HOST_TEMPLATES: &[&str] = &[
        "{name}",
        "{name}.{domain}",
        "{name} {name}.{domain}",
        "*.{domain}",
        "{name}-?? {name}-??.{domain}",
        "*.{domain} !{name}.{domain}",
        "10.{octet}.*.*",
    ];

    pub const NAMES: &[&str] = &["web", "db", "cache", "bastion", "build", "git", "api", "mail"];
    pub const DOMAINS: &[&str] = &["example.com", "internal", "corp.example.net", "lan"];
    pub const USERS: &[&str] = &["admin", "deploy", "git", "ubuntu", "root", "ops"];
    pub const KEYS: &[&str] = &["id_ed25519", "id_rsa", "deploy_key", "My Keys/work"];
    pub const SECTION_NAMES: &[&str] = &["Production", "Staging", "Personal", "Infrastructure"];

    /// Directive keywords; each is used at most once per section.
    pub const DIRECTIVES: &[&str] = &[
        "HostName",
        "User",
        "Port",
        "IdentityFile",
        "ProxyJump",
        "ForwardAgent",
        "ServerAliveInterval",
        "ProxyCommand",
        "LocalForward",
        "StrictHostKeyChecking",
    ];

    pub const ASSIGNMENTS: &[&str] = &[" ", " ", " ", "\t", " = ", "="];
}

/// Probability of inserting a comment section header (percentage).
const COMMENT_PROBABILITY: u32 = 20;

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn comment_line(text: &str) -> Line {
    Line::from_parts(0, ["", "", "", "", "", &format!("# {}", text), "\n"])
}

fn blank_line() -> Line {
    Line::from_parts(0, ["", "", "", "", "", "", "\n"])
}

fn directive_line(
    prefix: &str,
    keyword: &str,
    assignment: &str,
    values: &[String],
) -> Result<Line, EncodeError> {
    let arguments = encode_arguments(values)?;
    Ok(Line::from_parts(
        0,
        [prefix, keyword, assignment, &arguments, "", "", "\n"],
    ))
}

fn host_patterns(rng: &mut StdRng) -> Vec<String> {
    use vocabulary::*;

    let template = pick(rng, HOST_TEMPLATES);
    let name = pick(rng, NAMES);
    let domain = pick(rng, DOMAINS);
    let octet = rng.random_range(0..=255u8).to_string();
    template
        .replace("{name}", name)
        .replace("{domain}", domain)
        .replace("{octet}", &octet)
        .split(' ')
        .map(str::to_string)
        .collect()
}

fn directive_values(rng: &mut StdRng, keyword: &str) -> Vec<String> {
    use vocabulary::*;

    match keyword {
        "HostName" => vec![format!("{}.{}", pick(rng, NAMES), pick(rng, DOMAINS))],
        "User" => vec![pick(rng, USERS).to_string()],
        "Port" => vec![rng.random_range(22..=2222u16).to_string()],
        "IdentityFile" => vec![format!("~/.ssh/{}", pick(rng, KEYS))],
        "ProxyJump" => vec![format!("bastion.{}", pick(rng, DOMAINS))],
        "ServerAliveInterval" => vec![rng.random_range(10..=120u32).to_string()],
        "ProxyCommand" => ["ssh", "-W", "%h:%p", "bastion"]
            .iter()
            .map(|v| v.to_string())
            .collect(),
        "LocalForward" => {
            let port = rng.random_range(1024..=9999u16);
            vec![port.to_string(), format!("localhost:{}", port)]
        }
        _ => vec![if rng.random_bool(0.5) { "yes" } else { "no" }.to_string()],
    }
}

/// Generates a random ssh_config document based on configuration.
pub fn generate_document(config: &GeneratorConfig) -> Result<Document, EncodeError> {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let capacity = config.num_hosts * (config.max_directives_per_host + 2) + config.num_comments + 10;
    let mut lines = Vec::with_capacity(capacity);

    // Header with global defaults
    lines.push(comment_line("Auto-generated ssh_config for benchmarking"));
    lines.push(directive_line("", "ServerAliveCountMax", " ", &["3".to_string()])?);
    lines.push(blank_line());

    let mut comments_added = 0;

    for hosts_added in 0..config.num_hosts {
        if comments_added < config.num_comments
            && hosts_added > 0
            && rng.random_ratio(COMMENT_PROBABILITY, 100)
        {
            lines.push(blank_line());
            lines.push(comment_line(&format!("{} hosts", pick(&mut rng, SECTION_NAMES))));
            comments_added += 1;
        }

        lines.push(directive_line("", "Host", " ", &host_patterns(&mut rng))?);

        let count = rng.random_range(1..=config.max_directives_per_host.min(DIRECTIVES.len()));
        let prefix = if rng.random_bool(0.8) { "  " } else { "\t" };
        let keywords: Vec<&str> = DIRECTIVES.choose_multiple(&mut rng, count).copied().collect();
        for keyword in keywords {
            let values = directive_values(&mut rng, keyword);
            let assignment = pick(&mut rng, ASSIGNMENTS);
            lines.push(directive_line(prefix, keyword, assignment, &values)?);
        }
    }

    Ok(Document::from_lines(lines))
}

/// Generates an ssh_config file as a string.
pub fn generate(config: &GeneratorConfig) -> Result<String, EncodeError> {
    Ok(generate_document(config)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Ast;
    use crate::parse::parse_document;
    use crate::validate::validate_document;

    #[test]
    fn round_trip_small() {
        let content = generate(&GeneratorConfig::small()).unwrap();
        let parsed = parse_document(&content);
        assert!(
            parsed.is_ok(),
            "Generated content should parse: {:?}",
            parsed.errors
        );
        assert_eq!(parsed.document.to_string(), content);
    }

    #[test]
    fn generated_document_matches_parsed() {
        let document = generate_document(&GeneratorConfig::medium()).unwrap();
        let parsed = Document::parse(&document.to_string()).unwrap();
        assert_eq!(parsed, document);
    }

    #[test]
    fn section_count() {
        let document = generate_document(&GeneratorConfig::large()).unwrap();
        let sections = document.sections();
        // Leading implicit section plus one per host
        assert_eq!(sections.len(), 1_001);
        assert!(sections[0].is_implicit());
    }

    #[test]
    fn generated_content_validates() {
        let document = generate_document(&GeneratorConfig::medium()).unwrap();
        let result = validate_document(&document);
        assert!(result.is_ok(), "{:?}", result.errors);
    }

    #[test]
    fn deterministic_generation() {
        let config = GeneratorConfig::medium();
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }

    #[test]
    fn different_seeds_differ() {
        let content1 = generate(&GeneratorConfig::medium().with_seed(1)).unwrap();
        let content2 = generate(&GeneratorConfig::medium().with_seed(2)).unwrap();
        assert_ne!(content1, content2);
    }

    #[test]
    fn target_bytes_approximate() {
        let content = generate(&GeneratorConfig::target_bytes(100_000)).unwrap();
        assert!(
            content.len() > 50_000 && content.len() < 200_000,
            "Got {} bytes",
            content.len()
        );
    }

    #[test]
    fn zero_hosts_produces_header_only() {
        let document = generate_document(&GeneratorConfig::new(0)).unwrap();
        assert_eq!(document.num_lines(), 3);
        assert_eq!(document.sections().len(), 1);
    }

    #[test]
    fn with_max_directives_minimum() {
        let config = GeneratorConfig::default().with_max_directives(0);
        assert_eq!(config.max_directives_per_host, 1);
    }
}
